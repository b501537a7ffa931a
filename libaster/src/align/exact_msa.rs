use crate::align::structs::{Alignment, CapacityError, CostTensor, Msa};
use crate::scoring::{Cost, ScoreMatrix, INFINITY};
use crate::structs::Sequence;

/// Default ceiling on the number of cost tensor cells (one cell is one
/// machine word).
pub const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// Compute an optimal multiple sequence alignment of k sequences by
/// exact dynamic programming over a k-dimensional cost tensor.
///
/// Gap costs are read from the gap column of the score matrix, so this
/// engine is linear-gap only. Time and memory grow with the product of
/// the sequence lengths; the tensor size is checked against `max_cells`
/// before allocation and an infeasible call fails with [CapacityError].
pub fn exact_msa(
    seqs: &[Sequence],
    matrix: &ScoreMatrix,
    max_cells: usize,
) -> Result<Msa, CapacityError> {
    let k = seqs.len();

    if k == 0 {
        return Ok(Msa {
            cost: 0,
            alignment: Alignment::new(0),
        });
    }

    // one move bit per sequence
    if k >= usize::BITS as usize {
        return Err(CapacityError {
            cells: usize::MAX,
            max_cells,
        });
    }

    let shape: Vec<usize> = seqs.iter().map(|seq| seq.length + 1).collect();
    let mut dp = CostTensor::new(&shape, max_cells)?;

    let gap_code = matrix.gap_code();
    let mut index = vec![0usize; k];
    let mut predecessor = vec![0usize; k];
    let mut column = vec![0u8; k];

    // a row-major sweep visits every predecessor of a cell before the
    // cell itself; the origin keeps its initial cost of 0
    while advance(&mut index, &shape) {
        let mut best = INFINITY;

        for move_bits in 1..(1usize << k) {
            if !apply_move(
                move_bits,
                &index,
                seqs,
                gap_code,
                &mut predecessor,
                &mut column,
            ) {
                continue;
            }

            let candidate = dp.get(&predecessor) + matrix.column_cost(&column, gap_code);
            best = best.min(candidate);
        }

        dp.set(&index, best);
    }

    let final_index: Vec<usize> = shape.iter().map(|&extent| extent - 1).collect();
    let cost = dp.get(&final_index);
    let alignment = traceback_tensor(&dp, seqs, matrix);

    Ok(Msa { cost, alignment })
}

/// Derive the predecessor cell and the emitted column for one move.
///
/// Bit d of `move_bits` decides whether dimension d consumes a symbol
/// or takes a gap. A dimension can only move while its index is > 0;
/// returns false when the move is not applicable at this index.
fn apply_move(
    move_bits: usize,
    index: &[usize],
    seqs: &[Sequence],
    gap_code: u8,
    predecessor: &mut [usize],
    column: &mut [u8],
) -> bool {
    for (dim, seq) in seqs.iter().enumerate() {
        if move_bits & (1 << dim) != 0 {
            if index[dim] == 0 {
                return false;
            }
            predecessor[dim] = index[dim] - 1;
            column[dim] = seq.codes[index[dim] - 1];
        } else {
            predecessor[dim] = index[dim];
            column[dim] = gap_code;
        }
    }

    true
}

/// Advance a tensor index in row-major order (last dimension fastest);
/// returns false once every index has wrapped back to the origin.
fn advance(index: &mut [usize], shape: &[usize]) -> bool {
    for dim in (0..index.len()).rev() {
        index[dim] += 1;
        if index[dim] < shape[dim] {
            return true;
        }
        index[dim] = 0;
    }

    false
}

/// Walk the tensor from its final cell back to the origin, taking at
/// each step the first move (in descending bit-pattern order, so moves
/// that consume a symbol in low dimensions win ties) whose predecessor
/// cost plus column cost reproduces the stored cost.
fn traceback_tensor(dp: &CostTensor, seqs: &[Sequence], matrix: &ScoreMatrix) -> Alignment {
    let k = seqs.len();
    let gap_code = matrix.gap_code();

    let mut alignment = Alignment::new(k);
    let mut index: Vec<usize> = dp.shape().iter().map(|&extent| extent - 1).collect();
    let mut predecessor = vec![0usize; k];
    let mut column = vec![0u8; k];

    while index.iter().any(|&idx| idx > 0) {
        let current = dp.get(&index);
        let mut matched = false;

        for move_bits in (1..(1usize << k)).rev() {
            if !apply_move(
                move_bits,
                &index,
                seqs,
                gap_code,
                &mut predecessor,
                &mut column,
            ) {
                continue;
            }

            if current == dp.get(&predecessor) + matrix.column_cost(&column, gap_code) {
                alignment.push_column(&column);
                index.copy_from_slice(&predecessor);
                matched = true;
                break;
            }
        }

        if !matched {
            // only reachable on a tensor this engine did not fill
            panic!("tensor traceback failed at index {index:?}");
        }
    }

    alignment.reverse_columns();
    alignment
}
