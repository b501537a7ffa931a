use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::Serialize;
use thiserror::Error;

use crate::alphabet::{Alphabet, DuplicateSymbolError};

pub type Cost = isize;

/// Sentinel for undefined dynamic programming entries. Undefined entries
/// are only ever combined through saturating addition, so they are never
/// selected by a minimum.
pub const INFINITY: Cost = Cost::MAX;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("gap specification {line:?} is not one integer (linear) or two integers (affine)")]
    MalformedGapSpec { line: String },
    #[error("substitution row {line:?} does not start with a single symbol")]
    MalformedRow { line: String },
    #[error("substitution cost {token:?} is not an integer")]
    MalformedCost { token: String },
    #[error("substitution row for symbol {symbol} has {found} costs, expected {expected}")]
    RowArityMismatch {
        symbol: char,
        found: usize,
        expected: usize,
    },
    #[error(transparent)]
    DuplicateSymbol(#[from] DuplicateSymbolError),
    #[error("scoring configuration declares no symbols")]
    EmptyTable,
}

/// The gap cost model.
///
/// `Linear` charges `cost` for every gap symbol independently. `Affine`
/// charges `open + extend` for the first symbol of a contiguous gap run
/// and `extend` for each symbol after it, so a run of length k costs
/// `open + extend * k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GapModel {
    Linear { cost: Cost },
    Affine { open: Cost, extend: Cost },
}

/// A square substitution cost table indexed by a pair of alphabet codes.
///
/// The table has one row and column per alphabet symbol, gap included, so
/// the gap column doubles as the per-symbol gap cost for engines that
/// score gaps through the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    dim: usize,
    costs: Vec<Cost>,
}

impl ScoreMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            costs: vec![0; dim * dim],
        }
    }

    /// The 5x5 {A, C, G, T, -} table with 0 on the diagonal, 2 for
    /// transitions (A<->G, C<->T) and 5 for everything else.
    pub fn dna_default() -> Self {
        let mut matrix = Self::new(5);
        #[rustfmt::skip]
        let costs = [
            [0, 5, 2, 5, 5], // A
            [5, 0, 5, 2, 5], // C
            [2, 5, 0, 5, 5], // G
            [5, 2, 5, 0, 5], // T
            [5, 5, 5, 5, 0], // -
        ];

        for (a, row) in costs.iter().enumerate() {
            for (b, &cost) in row.iter().enumerate() {
                matrix.set(a as u8, b as u8, cost);
            }
        }

        matrix
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The code of the gap symbol, which is always the last row/column.
    pub fn gap_code(&self) -> u8 {
        (self.dim - 1) as u8
    }

    #[inline]
    fn offset(&self, a: u8, b: u8) -> usize {
        assert!(
            (a as usize) < self.dim && (b as usize) < self.dim,
            "score matrix index ({a}, {b}) out of range for dimension {}",
            self.dim
        );
        a as usize * self.dim + b as usize
    }

    #[inline]
    pub fn get(&self, a: u8, b: u8) -> Cost {
        self.costs[self.offset(a, b)]
    }

    #[inline]
    pub fn set(&mut self, a: u8, b: u8, cost: Cost) {
        let offset = self.offset(a, b);
        self.costs[offset] = cost;
    }

    /// The sum-of-pairs cost of one alignment column. Gap-vs-gap pairs
    /// are never scored.
    pub fn column_cost(&self, column: &[u8], gap_code: u8) -> Cost {
        let mut cost = 0;

        for (idx, &a) in column.iter().enumerate() {
            for &b in &column[idx + 1..] {
                if a == gap_code && b == gap_code {
                    continue;
                }
                cost += self.get(a, b);
            }
        }

        cost
    }
}

/// A parsed scoring configuration: the alphabet, the substitution cost
/// table, and the gap model.
#[derive(Clone, Debug)]
pub struct ScoringConfig {
    pub alphabet: Alphabet,
    pub matrix: ScoreMatrix,
    pub gap: GapModel,
}

impl ScoringConfig {
    pub fn dna(gap: GapModel) -> Self {
        Self {
            alphabet: Alphabet::dna(),
            matrix: ScoreMatrix::dna_default(),
            gap,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "failed to read scoring configuration: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        Ok(text.parse()?)
    }
}

impl FromStr for ScoringConfig {
    type Err = ConfigError;

    /// Parse a scoring configuration of the form
    ///
    /// ```text
    /// 5
    /// A 0 5 2 5 5
    /// C 5 0 5 2 5
    /// G 2 5 0 5 5
    /// T 5 2 5 0 5
    /// ```
    ///
    /// The first line is the gap specification: one integer g for a
    /// linear model (a gap run of length k costs g * k), or two integers
    /// `a b` for an affine model (a run of length k costs a * k + b).
    /// Each remaining line declares one symbol followed by its cost
    /// against every symbol in declaration order, with the cost against
    /// the gap symbol last. The gap symbol itself is never declared; its
    /// row is completed by symmetry and gap-vs-gap is never scored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        let gap_line = lines.next().unwrap_or("");
        let gap_tokens: Vec<&str> = gap_line.split_whitespace().collect();
        let gap_costs: Vec<Cost> = gap_tokens
            .iter()
            .map(|token| token.parse())
            .collect::<Result<_, _>>()
            .map_err(|_| ConfigError::MalformedGapSpec {
                line: gap_line.to_string(),
            })?;

        let gap = match gap_costs[..] {
            [cost] => GapModel::Linear { cost },
            [extend, open] => GapModel::Affine { open, extend },
            _ => {
                return Err(ConfigError::MalformedGapSpec {
                    line: gap_line.to_string(),
                })
            }
        };

        let mut symbols: Vec<u8> = vec![];
        let mut rows: Vec<Vec<Cost>> = vec![];

        for line in lines {
            let mut tokens = line.split_whitespace();

            let symbol = match tokens.next() {
                Some(token) if token.len() == 1 => token.as_bytes()[0],
                _ => {
                    return Err(ConfigError::MalformedRow {
                        line: line.to_string(),
                    })
                }
            };

            let costs: Vec<Cost> = tokens
                .map(|token| {
                    token.parse().map_err(|_| ConfigError::MalformedCost {
                        token: token.to_string(),
                    })
                })
                .collect::<Result<_, _>>()?;

            symbols.push(symbol);
            rows.push(costs);
        }

        if rows.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let alphabet = Alphabet::new(&symbols)?;
        let dim = alphabet.len();

        for (&symbol, row) in symbols.iter().zip(rows.iter()) {
            if row.len() != dim {
                return Err(ConfigError::RowArityMismatch {
                    symbol: char::from(symbol),
                    found: row.len(),
                    expected: dim,
                });
            }
        }

        let mut matrix = ScoreMatrix::new(dim);
        for (a, row) in rows.iter().enumerate() {
            for (b, &cost) in row.iter().enumerate() {
                matrix.set(a as u8, b as u8, cost);
            }
        }

        // the gap row mirrors the gap column
        let gap_code = matrix.gap_code();
        for b in 0..gap_code {
            matrix.set(gap_code, b, matrix.get(b, gap_code));
        }

        Ok(Self {
            alphabet,
            matrix,
            gap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    const LINEAR_CONFIG: &str = "\
        5\n\
        A 0 5 2 5 5\n\
        C 5 0 5 2 5\n\
        G 2 5 0 5 5\n\
        T 5 2 5 0 5\n";

    #[test]
    fn test_parse_linear_config() -> anyhow::Result<()> {
        let config: ScoringConfig = LINEAR_CONFIG.parse()?;

        check!(config.gap == GapModel::Linear { cost: 5 });
        check!(config.alphabet == Alphabet::dna());
        check!(config.matrix == ScoreMatrix::dna_default());

        Ok(())
    }

    #[test]
    fn test_parse_affine_config() -> anyhow::Result<()> {
        let config: ScoringConfig = "\
            1 5\n\
            A 0 5 2 5 5\n\
            C 5 0 5 2 5\n\
            G 2 5 0 5 5\n\
            T 5 2 5 0 5\n"
            .parse()?;

        // an affine line `a b` charges a per symbol and b per run
        check!(config.gap == GapModel::Affine { open: 5, extend: 1 });

        Ok(())
    }

    #[test]
    fn test_parse_failures() {
        let result: Result<ScoringConfig, _> = "".parse();
        check!(matches!(result, Err(ConfigError::MalformedGapSpec { .. })));

        let result: Result<ScoringConfig, _> = "5 5 5\nA 0 5\nC 5 0".parse();
        check!(matches!(result, Err(ConfigError::MalformedGapSpec { .. })));

        let result: Result<ScoringConfig, _> = "g\nA 0 5\nC 5 0".parse();
        check!(matches!(result, Err(ConfigError::MalformedGapSpec { .. })));

        let result: Result<ScoringConfig, _> = "5\nA 0 5 5\nA 5 0 5".parse();
        check!(matches!(result, Err(ConfigError::DuplicateSymbol(_))));

        let result: Result<ScoringConfig, _> = "5\nA 0 5 5\nC 5 0".parse();
        check!(matches!(result, Err(ConfigError::RowArityMismatch { .. })));

        let result: Result<ScoringConfig, _> = "5\nA 0 x 5\nC 5 0 5".parse();
        check!(matches!(result, Err(ConfigError::MalformedCost { .. })));

        let result: Result<ScoringConfig, _> = "5".parse();
        check!(matches!(result, Err(ConfigError::EmptyTable)));
    }

    #[test]
    fn test_column_cost() {
        let matrix = ScoreMatrix::dna_default();

        check!(matrix.column_cost(&[0, 0, 0], 4) == 0);
        check!(matrix.column_cost(&[0, 1, 2], 4) == 12);
        check!(matrix.column_cost(&[0, 1], 4) == 5);
        // gap-vs-gap pairs are skipped
        check!(matrix.column_cost(&[4, 4, 0], 4) == 10);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_matrix_index_out_of_range() {
        let matrix = ScoreMatrix::dna_default();
        matrix.get(5, 0);
    }
}
