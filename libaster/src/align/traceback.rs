use crate::align::structs::{AffineMatrices, Alignment, CostMatrix};
use crate::scoring::{Cost, ScoreMatrix};
use crate::structs::Sequence;

/// Reconstruct one optimal linear-gap alignment from a filled cost
/// matrix, walking from (n, m) back to (0, 0).
///
/// Moves are tested in a fixed priority order: substitution first, then
/// a gap in `y`, then a gap in `x`. The priority is the tie-break policy
/// when several moves are optimal, so reruns on the same inputs always
/// produce the identical alignment.
pub fn traceback_linear(
    dp: &CostMatrix,
    x: &Sequence,
    y: &Sequence,
    matrix: &ScoreMatrix,
    gap: Cost,
) -> Alignment {
    let gap_code = matrix.gap_code();
    let mut alignment = Alignment::new(2);

    let mut row = x.length;
    let mut col = y.length;

    while row > 0 || col > 0 {
        let current = dp.get(row, col);

        if row > 0
            && col > 0
            && current
                == dp.get(row - 1, col - 1) + matrix.get(x.codes[row - 1], y.codes[col - 1])
        {
            alignment.push_column(&[x.codes[row - 1], y.codes[col - 1]]);
            row -= 1;
            col -= 1;
        } else if row > 0 && current == dp.get(row - 1, col) + gap {
            alignment.push_column(&[x.codes[row - 1], gap_code]);
            row -= 1;
        } else if col > 0 && current == dp.get(row, col - 1) + gap {
            alignment.push_column(&[gap_code, y.codes[col - 1]]);
            col -= 1;
        } else {
            // only reachable on a matrix this engine did not fill
            panic!("linear traceback failed at ({row}, {col})");
        }
    }

    alignment.reverse_columns();
    alignment
}

/// Reconstruct one optimal affine-gap alignment from the filled T/I/D
/// grids.
///
/// The walk matches the current total cost against whichever grid
/// produced it; inside a gap run it keeps consuming `extend` steps until
/// the `open` transition is found, then returns to the total grid.
pub fn traceback_affine(
    dp: &AffineMatrices,
    x: &Sequence,
    y: &Sequence,
    matrix: &ScoreMatrix,
    open: Cost,
    extend: Cost,
) -> Alignment {
    let gap_code = matrix.gap_code();
    let mut alignment = Alignment::new(2);

    let mut row = x.length;
    let mut col = y.length;

    while row > 0 || col > 0 {
        let current = dp.total.get(row, col);

        if row > 0
            && col > 0
            && current
                == dp
                    .total
                    .get(row - 1, col - 1)
                    .saturating_add(matrix.get(x.codes[row - 1], y.codes[col - 1]))
        {
            alignment.push_column(&[x.codes[row - 1], y.codes[col - 1]]);
            row -= 1;
            col -= 1;
        } else if row > 0 && current == dp.delete.get(row, col) {
            loop {
                alignment.push_column(&[x.codes[row - 1], gap_code]);
                let run_cost = dp.delete.get(row, col);

                if row > 1 && run_cost == dp.delete.get(row - 1, col).saturating_add(extend) {
                    row -= 1;
                } else if run_cost
                    == dp.total.get(row - 1, col).saturating_add(open + extend)
                {
                    row -= 1;
                    break;
                } else {
                    panic!("affine traceback failed in a deletion run at ({row}, {col})");
                }
            }
        } else if col > 0 && current == dp.insert.get(row, col) {
            loop {
                alignment.push_column(&[gap_code, y.codes[col - 1]]);
                let run_cost = dp.insert.get(row, col);

                if col > 1 && run_cost == dp.insert.get(row, col - 1).saturating_add(extend) {
                    col -= 1;
                } else if run_cost
                    == dp.total.get(row, col - 1).saturating_add(open + extend)
                {
                    col -= 1;
                    break;
                } else {
                    panic!("affine traceback failed in an insertion run at ({row}, {col})");
                }
            }
        } else {
            panic!("affine traceback failed at ({row}, {col})");
        }
    }

    alignment.reverse_columns();
    alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{align_affine, align_linear, global_linear};
    use crate::alphabet::Alphabet;

    fn seq(text: &str) -> Sequence {
        Sequence::from_utf8(text.as_bytes(), &Alphabet::dna()).unwrap()
    }

    fn strings(alignment: &Alignment) -> Vec<String> {
        alignment.to_strings(&Alphabet::dna()).unwrap()
    }

    #[test]
    fn test_known_linear_alignment() {
        let matrix = ScoreMatrix::dna_default();
        let (cost, alignment) = align_linear(&seq("AATAAT"), &seq("AAGG"), &matrix, 5);

        assert_eq!(cost, 14);
        assert_eq!(strings(&alignment), vec!["AATAAT", "AA-GG-"]);
    }

    #[test]
    fn test_traceback_is_deterministic() {
        let matrix = ScoreMatrix::dna_default();
        let (x, y) = (seq("ACGTGTCAACGT"), seq("ACGTCGTAGCTA"));

        let (_, first) = align_linear(&x, &y, &matrix, 5);
        for _ in 0..5 {
            let (_, rerun) = align_linear(&x, &y, &matrix, 5);
            assert_eq!(rerun, first);
        }
    }

    #[test]
    fn test_alignment_reproduces_inputs() {
        let matrix = ScoreMatrix::dna_default();
        let cases = [
            ("ACGTGTCAACGT", "ACGTCGTAGCTA"),
            ("AATAAT", "AAGG"),
            ("", "ACGT"),
            ("GGGG", ""),
        ];

        for (a, b) in cases {
            let (x, y) = (seq(a), seq(b));

            let (_, alignment) = align_linear(&x, &y, &matrix, 5);
            assert_eq!(alignment.ungapped_row(0, 4), x.codes);
            assert_eq!(alignment.ungapped_row(1, 4), y.codes);

            let (_, alignment) = align_affine(&x, &y, &matrix, 5, 1);
            assert_eq!(alignment.ungapped_row(0, 4), x.codes);
            assert_eq!(alignment.ungapped_row(1, 4), y.codes);
        }
    }

    #[test]
    fn test_edge_walks() {
        let matrix = ScoreMatrix::dna_default();

        // one sequence empty: the walk runs down a border of the matrix
        let (cost, alignment) = align_linear(&seq("AC"), &seq(""), &matrix, 5);
        assert_eq!(cost, 10);
        assert_eq!(strings(&alignment), vec!["AC", "--"]);

        let (cost, alignment) = align_linear(&seq(""), &seq(""), &matrix, 5);
        assert_eq!(cost, 0);
        assert_eq!(alignment.num_columns(), 0);
    }

    #[test]
    #[should_panic(expected = "linear traceback failed")]
    fn test_foreign_matrix_fails_fast() {
        let matrix = ScoreMatrix::dna_default();
        let (x, y) = (seq("AATAAT"), seq("AAGG"));

        let mut dp = global_linear(&x, &y, &matrix, 5);
        dp.set(x.length, y.length, -1);

        traceback_linear(&dp, &x, &y, &matrix, 5);
    }
}
