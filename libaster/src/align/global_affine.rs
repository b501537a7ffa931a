use crate::align::structs::{AffineMatrices, Alignment};
use crate::align::traceback_affine;
use crate::scoring::{Cost, ScoreMatrix, INFINITY};
use crate::structs::Sequence;

/// Fill the three (n+1) x (m+1) grids for a global alignment of `x` and
/// `y` under an affine gap model (gotoh).
///
/// A gap run of length k costs `open + extend * k`. Undefined entries
/// hold [INFINITY] and participate in minima without ever being chosen.
pub fn global_affine(
    x: &Sequence,
    y: &Sequence,
    matrix: &ScoreMatrix,
    open: Cost,
    extend: Cost,
) -> AffineMatrices {
    let mut dp = AffineMatrices::new(x.length + 1, y.length + 1);
    dp.total.set(0, 0, 0);

    for row in 0..=x.length {
        for col in 0..=y.length {
            if row > 0 {
                let open_path = dp.total.get(row - 1, col).saturating_add(open + extend);
                let extend_path = dp.delete.get(row - 1, col).saturating_add(extend);
                dp.delete.set(row, col, open_path.min(extend_path));
            }

            if col > 0 {
                let open_path = dp.total.get(row, col - 1).saturating_add(open + extend);
                let extend_path = dp.insert.get(row, col - 1).saturating_add(extend);
                dp.insert.set(row, col, open_path.min(extend_path));
            }

            if row > 0 || col > 0 {
                let mut best = INFINITY;

                if row > 0 && col > 0 {
                    let score = matrix.get(x.codes[row - 1], y.codes[col - 1]);
                    best = best.min(dp.total.get(row - 1, col - 1).saturating_add(score));
                }
                if row > 0 {
                    best = best.min(dp.delete.get(row, col));
                }
                if col > 0 {
                    best = best.min(dp.insert.get(row, col));
                }

                dp.total.set(row, col, best);
            }
        }
    }

    dp
}

/// The optimal cost and one optimal alignment under an affine gap model.
pub fn align_affine(
    x: &Sequence,
    y: &Sequence,
    matrix: &ScoreMatrix,
    open: Cost,
    extend: Cost,
) -> (Cost, Alignment) {
    let dp = global_affine(x, y, matrix, open, extend);
    let cost = dp.total.get(x.length, y.length);
    let alignment = traceback_affine(&dp, x, y, matrix, open, extend);

    (cost, alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::global_linear_cost;
    use crate::alphabet::Alphabet;

    fn seq(text: &str) -> Sequence {
        Sequence::from_utf8(text.as_bytes(), &Alphabet::dna()).unwrap()
    }

    #[test]
    fn test_base_cases() {
        let matrix = ScoreMatrix::dna_default();

        let dp = global_affine(&seq(""), &seq(""), &matrix, 5, 1);
        assert_eq!(dp.total.get(0, 0), 0);

        // a gap run of length k costs open + extend * k
        let dp = global_affine(&seq("A"), &seq(""), &matrix, 5, 1);
        assert_eq!(dp.total.get(1, 0), 6);

        let dp = global_affine(&seq("ACGT"), &seq(""), &matrix, 5, 1);
        assert_eq!(dp.total.get(4, 0), 9);
    }

    #[test]
    fn test_one_run_beats_two() {
        let matrix = ScoreMatrix::dna_default();
        let x = seq("ACGT");
        let y = seq("AT");

        // ACGT / A--T: one run of length 2 plus two matches
        let (cost, alignment) = align_affine(&x, &y, &matrix, 5, 1);
        assert_eq!(cost, 7);
        assert_eq!(
            alignment.to_strings(&Alphabet::dna()).unwrap(),
            vec!["ACGT", "A--T"]
        );
    }

    #[test]
    fn test_zero_open_matches_linear() {
        let matrix = ScoreMatrix::dna_default();

        for (a, b) in [("AATAAT", "AAGG"), ("ACGTGTCAACGT", "ACGTCGTAGCTA")] {
            let (x, y) = (seq(a), seq(b));
            let dp = global_affine(&x, &y, &matrix, 0, 5);
            assert_eq!(
                dp.total.get(x.length, y.length),
                global_linear_cost(&x, &y, &matrix, 5)
            );
        }
    }

    #[test]
    fn test_cost_symmetry() {
        let matrix = ScoreMatrix::dna_default();
        let (x, y) = (seq("ACGTGTCAACGT"), seq("ACGTCGTAGCTA"));

        let forward = global_affine(&x, &y, &matrix, 5, 1);
        let backward = global_affine(&y, &x, &matrix, 5, 1);
        assert_eq!(
            forward.total.get(x.length, y.length),
            backward.total.get(y.length, x.length)
        );
    }
}
