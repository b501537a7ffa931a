use crate::align::structs::{Alignment, LengthMismatchError, Msa};
use crate::align::{align_linear, global_linear_cost};
use crate::scoring::{Cost, ScoreMatrix};
use crate::structs::Sequence;

/// The optimal linear-gap cost of every unordered sequence pair, as a
/// symmetric k x k matrix with 0 on the diagonal.
pub fn pairwise_cost_matrix(
    seqs: &[Sequence],
    matrix: &ScoreMatrix,
    gap: Cost,
) -> Vec<Vec<Cost>> {
    let k = seqs.len();
    let mut costs = vec![vec![0; k]; k];

    for i in 0..k {
        for j in i + 1..k {
            let cost = global_linear_cost(&seqs[i], &seqs[j], matrix, gap);
            costs[i][j] = cost;
            costs[j][i] = cost;
        }
    }

    costs
}

/// The index of the center sequence: the one minimizing its total
/// pairwise cost to all others, lowest index on ties.
pub fn center_index(costs: &[Vec<Cost>]) -> usize {
    let mut center = 0;
    let mut center_total = Cost::MAX;

    for (idx, row) in costs.iter().enumerate() {
        let total: Cost = row.iter().sum();
        if total < center_total {
            center = idx;
            center_total = total;
        }
    }

    center
}

/// Build a multiple alignment of k sequences with the center-star
/// 2-approximation.
///
/// Every sequence is pairwise-aligned against the center and the
/// pairwise alignments are merged one at a time, synchronizing on the
/// shared center row. The returned cost is recomputed exactly as the
/// sum-of-pairs cost of the merged columns and is at most twice the
/// optimal sum-of-pairs cost.
pub fn approximate_msa(
    seqs: &[Sequence],
    matrix: &ScoreMatrix,
    gap: Cost,
) -> Result<Msa, LengthMismatchError> {
    let k = seqs.len();
    let gap_code = matrix.gap_code();

    if k == 0 {
        return Ok(Msa {
            cost: 0,
            alignment: Alignment::new(0),
        });
    }

    let costs = pairwise_cost_matrix(seqs, matrix, gap);
    let center = center_index(&costs);

    // the running alignment starts as the center alone and gains one
    // row per merged pairwise alignment
    let mut merged: Vec<Vec<u8>> = vec![seqs[center].codes.clone()];
    let mut row_to_input = vec![center];

    for (idx, seq) in seqs.iter().enumerate() {
        if idx == center {
            continue;
        }

        let (_, pairwise) = align_linear(&seqs[center], seq, matrix, gap);
        merge_pairwise(&mut merged, &pairwise, gap_code)?;
        row_to_input.push(idx);
    }

    // restore input row order
    let mut rows = vec![vec![]; k];
    for (row, input_idx) in row_to_input.into_iter().enumerate() {
        rows[input_idx] = std::mem::take(&mut merged[row]);
    }

    let alignment = Alignment::from_rows(rows);
    let cost = alignment.sum_of_pairs_cost(matrix, gap_code)?;

    Ok(Msa { cost, alignment })
}

/// Extend the running alignment with one pairwise alignment of the
/// center (row 0 of `pairwise`) against a new sequence (row 1).
///
/// The two column sequences are interleaved in a single lockstep pass
/// over the shared center row: equal center columns merge, a gap in the
/// running center row keeps its column with the new row gapped, and a
/// gap in the pairwise center row inserts a column gapped in every
/// previously merged row.
fn merge_pairwise(
    merged: &mut Vec<Vec<u8>>,
    pairwise: &Alignment,
    gap_code: u8,
) -> Result<(), LengthMismatchError> {
    let width = merged[0].len();
    let pair_center = pairwise.row(0);
    let pair_other = pairwise.row(1);

    let mut out: Vec<Vec<u8>> = vec![vec![]; merged.len() + 1];
    let mut col = 0;
    let mut pair_col = 0;

    while col < width && pair_col < pair_center.len() {
        if merged[0][col] == pair_center[pair_col] {
            for (row, codes) in merged.iter().enumerate() {
                out[row].push(codes[col]);
            }
            out[merged.len()].push(pair_other[pair_col]);
            col += 1;
            pair_col += 1;
        } else if merged[0][col] == gap_code {
            for (row, codes) in merged.iter().enumerate() {
                out[row].push(codes[col]);
            }
            out[merged.len()].push(gap_code);
            col += 1;
        } else if pair_center[pair_col] == gap_code {
            for row in out.iter_mut().take(merged.len()) {
                row.push(gap_code);
            }
            out[merged.len()].push(pair_other[pair_col]);
            pair_col += 1;
        } else {
            // both center rows strip to the same sequence, so two
            // disagreeing non-gap symbols mean the caller handed us
            // alignments of different centers
            return Err(LengthMismatchError::CenterDisagrees { column: col });
        }
    }

    while col < width {
        for (row, codes) in merged.iter().enumerate() {
            out[row].push(codes[col]);
        }
        out[merged.len()].push(gap_code);
        col += 1;
    }

    while pair_col < pair_center.len() {
        for row in out.iter_mut().take(merged.len()) {
            row.push(gap_code);
        }
        out[merged.len()].push(pair_other[pair_col]);
        pair_col += 1;
    }

    *merged = out;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::exact_msa;
    use crate::alphabet::Alphabet;
    use crate::simulate::random_sequences;

    fn seqs(texts: &[&str]) -> Vec<Sequence> {
        texts
            .iter()
            .map(|text| Sequence::from_utf8(text.as_bytes(), &Alphabet::dna()).unwrap())
            .collect()
    }

    #[test]
    fn test_center_choice() {
        let matrix = ScoreMatrix::dna_default();

        let costs = pairwise_cost_matrix(&seqs(&["AA", "CT", "CT"]), &matrix, 5);
        // ties break toward the lowest index
        assert_eq!(center_index(&costs), 1);
    }

    #[test]
    fn test_two_sequences_are_exact() -> anyhow::Result<()> {
        let matrix = ScoreMatrix::dna_default();

        let msa = approximate_msa(&seqs(&["AATAAT", "AAGG"]), &matrix, 5)?;
        assert_eq!(msa.cost, 14);
        assert_eq!(
            msa.alignment.to_strings(&Alphabet::dna())?,
            vec!["AATAAT", "AA-GG-"]
        );

        Ok(())
    }

    #[test]
    fn test_rows_reproduce_inputs() -> anyhow::Result<()> {
        let matrix = ScoreMatrix::dna_default();
        let inputs = seqs(&["ACGTACGT", "TGCA", "", "ACCT", "GGGGGGGGGG"]);

        let msa = approximate_msa(&inputs, &matrix, 5)?;
        for (row, input) in inputs.iter().enumerate() {
            assert_eq!(msa.alignment.ungapped_row(row, 4), input.codes);
        }

        Ok(())
    }

    #[test]
    fn test_degenerate_cases() -> anyhow::Result<()> {
        let matrix = ScoreMatrix::dna_default();

        let msa = approximate_msa(&seqs(&[]), &matrix, 5)?;
        assert_eq!(msa.cost, 0);

        let msa = approximate_msa(&seqs(&["ACGT"]), &matrix, 5)?;
        assert_eq!(msa.cost, 0);
        assert_eq!(msa.alignment.row(0), &[0, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_two_approximation_bound() -> anyhow::Result<()> {
        let matrix = ScoreMatrix::dna_default();
        let alphabet = Alphabet::dna();

        for seed in 0..8 {
            let inputs = random_sequences(4, 8, &alphabet, seed);

            let exact = exact_msa(&inputs, &matrix, 1_000_000).unwrap();
            let approx = approximate_msa(&inputs, &matrix, 5)?;

            assert!(
                approx.cost <= 2 * exact.cost,
                "seed {seed}: approximate cost {} above twice the optimal {}",
                approx.cost,
                exact.cost
            );
            assert!(approx.cost >= exact.cost);
        }

        Ok(())
    }
}
