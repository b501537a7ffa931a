use crate::align::structs::{Alignment, CostMatrix};
use crate::align::traceback_linear;
use crate::scoring::{Cost, ScoreMatrix};
use crate::structs::Sequence;

/// Fill the full (n+1) x (m+1) cost matrix for a global alignment of
/// `x` and `y` under a linear gap model.
///
/// Cell (i, j) holds the minimal cost of aligning the first i symbols
/// of `x` against the first j symbols of `y`.
pub fn global_linear(x: &Sequence, y: &Sequence, matrix: &ScoreMatrix, gap: Cost) -> CostMatrix {
    let mut dp = CostMatrix::new(x.length + 1, y.length + 1, 0);

    for col in 1..=y.length {
        dp.set(0, col, col as Cost * gap);
    }

    for row in 1..=x.length {
        let x_code = x.codes[row - 1];
        dp.set(row, 0, row as Cost * gap);

        for col in 1..=y.length {
            let substitution = dp.get(row - 1, col - 1) + matrix.get(x_code, y.codes[col - 1]);
            let gap_in_y = dp.get(row - 1, col) + gap;
            let gap_in_x = dp.get(row, col - 1) + gap;

            dp.set(row, col, substitution.min(gap_in_y).min(gap_in_x));
        }
    }

    dp
}

/// The optimal global linear-gap alignment cost in linear space.
///
/// Same recurrence as [global_linear], retaining only two rows; the
/// longer sequence is always placed on the row axis so the retained
/// rows span the shorter one.
pub fn global_linear_cost(x: &Sequence, y: &Sequence, matrix: &ScoreMatrix, gap: Cost) -> Cost {
    if y.length > x.length {
        return global_linear_cost(y, x, matrix, gap);
    }

    let mut previous: Vec<Cost> = (0..=y.length).map(|col| col as Cost * gap).collect();
    let mut current: Vec<Cost> = vec![0; y.length + 1];

    for row in 1..=x.length {
        let x_code = x.codes[row - 1];
        current[0] = row as Cost * gap;

        for col in 1..=y.length {
            let substitution = previous[col - 1] + matrix.get(x_code, y.codes[col - 1]);
            let gap_in_y = previous[col] + gap;
            let gap_in_x = current[col - 1] + gap;

            current[col] = substitution.min(gap_in_y).min(gap_in_x);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[y.length]
}

/// The optimal cost and one optimal alignment under a linear gap model.
pub fn align_linear(
    x: &Sequence,
    y: &Sequence,
    matrix: &ScoreMatrix,
    gap: Cost,
) -> (Cost, Alignment) {
    let dp = global_linear(x, y, matrix, gap);
    let cost = dp.get(x.length, y.length);
    let alignment = traceback_linear(&dp, x, y, matrix, gap);

    (cost, alignment)
}
