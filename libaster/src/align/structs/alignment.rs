use serde::Serialize;
use thiserror::Error;

use crate::alphabet::{Alphabet, UnknownCodeError};
use crate::scoring::{Cost, ScoreMatrix};

#[derive(Error, Debug)]
pub enum LengthMismatchError {
    #[error("alignment row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("center rows disagree at column {column}")]
    CenterDisagrees { column: usize },
}

/// A gapped alignment of k sequences, stored as one gap-padded code row
/// per input sequence.
///
/// Removing the gap symbols from row i reproduces input sequence i
/// exactly. Tracebacks build alignments back-to-front and reverse the
/// columns before returning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    rows: Vec<Vec<u8>>,
}

impl Alignment {
    pub fn new(num_rows: usize) -> Self {
        Self {
            rows: vec![vec![]; num_rows],
        }
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.rows[row]
    }

    /// Row `row` with all gap symbols removed.
    pub fn ungapped_row(&self, row: usize, gap_code: u8) -> Vec<u8> {
        self.rows[row]
            .iter()
            .copied()
            .filter(|&code| code != gap_code)
            .collect()
    }

    pub fn push_column(&mut self, column: &[u8]) {
        assert_eq!(
            column.len(),
            self.rows.len(),
            "alignment column has the wrong number of rows"
        );

        for (row, &code) in self.rows.iter_mut().zip(column.iter()) {
            row.push(code);
        }
    }

    pub fn reverse_columns(&mut self) {
        for row in self.rows.iter_mut() {
            row.reverse();
        }
    }

    /// The sum-of-pairs cost of the alignment: the substitution cost of
    /// every unordered row pair in every column, where gap-vs-gap pairs
    /// are never scored.
    pub fn sum_of_pairs_cost(
        &self,
        matrix: &ScoreMatrix,
        gap_code: u8,
    ) -> Result<Cost, LengthMismatchError> {
        let width = self.num_columns();
        for (row, codes) in self.rows.iter().enumerate() {
            if codes.len() != width {
                return Err(LengthMismatchError::RaggedRow {
                    row,
                    found: codes.len(),
                    expected: width,
                });
            }
        }

        let mut cost = 0;
        let mut column = vec![0u8; self.rows.len()];
        for col in 0..width {
            for (row, codes) in self.rows.iter().enumerate() {
                column[row] = codes[col];
            }
            cost += matrix.column_cost(&column, gap_code);
        }

        Ok(cost)
    }

    pub fn to_strings(&self, alphabet: &Alphabet) -> Result<Vec<String>, UnknownCodeError> {
        self.rows.iter().map(|row| alphabet.decode(row)).collect()
    }
}

/// A multiple sequence alignment paired with its sum-of-pairs cost.
#[derive(Clone, Debug, Serialize)]
pub struct Msa {
    pub cost: Cost,
    pub alignment: Alignment,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gapped(rows: &[&str]) -> Alignment {
        let alphabet = Alphabet::dna();
        Alignment::from_rows(
            rows.iter()
                .map(|row| alphabet.encode(row).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_push_and_reverse() {
        let mut alignment = Alignment::new(2);
        alignment.push_column(&[3, 4]);
        alignment.push_column(&[0, 0]);
        alignment.reverse_columns();

        assert_eq!(alignment, gapped(&["AT", "A-"]));
        assert_eq!(alignment.num_columns(), 2);
        assert_eq!(alignment.ungapped_row(1, 4), vec![0]);
    }

    #[test]
    fn test_sum_of_pairs_cost() -> anyhow::Result<()> {
        let matrix = ScoreMatrix::dna_default();

        let alignment = gapped(&["AATAAT", "AA-GG-"]);
        assert_eq!(alignment.sum_of_pairs_cost(&matrix, 4)?, 14);

        // gap-vs-gap is never scored
        let alignment = gapped(&["A-", "--", "-C"]);
        assert_eq!(alignment.sum_of_pairs_cost(&matrix, 4)?, 20);

        Ok(())
    }

    #[test]
    fn test_sum_of_pairs_ragged_rows() {
        let matrix = ScoreMatrix::dna_default();
        let alignment = gapped(&["AAT", "AA"]);

        let result = alignment.sum_of_pairs_cost(&matrix, 4);
        assert!(matches!(
            result,
            Err(LengthMismatchError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_to_strings() -> anyhow::Result<()> {
        let alphabet = Alphabet::dna();
        let alignment = gapped(&["AC-T", "A-GT"]);

        assert_eq!(alignment.to_strings(&alphabet)?, vec!["AC-T", "A-GT"]);

        Ok(())
    }
}
