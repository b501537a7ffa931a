use std::io::Write;

use anyhow::Result;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use libaster::align::{self, global_linear_cost};
use libaster::scoring::{Cost, GapModel, ScoringConfig};
use libaster::structs::Sequence;

use crate::args::{MsaArgs, PairwiseArgs};
use crate::extension_traits::open_output;
use crate::pipeline::{write_msa, GapModelMismatchError};

pub fn exact_msa(args: &MsaArgs) -> Result<()> {
    let config = ScoringConfig::from_path(&args.config_path)?;
    let seqs = Sequence::from_fasta(&args.seqs_path, &config.alphabet)?;

    let msa = align::exact_msa(&seqs, &config.matrix, args.max_cells)?;

    let names: Vec<String> = seqs.iter().map(|seq| seq.name.clone()).collect();
    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    write_msa(&mut out, args.output_args.json, &msa, &names, &config.alphabet)
}

pub fn approx_msa(args: &MsaArgs) -> Result<()> {
    let config = ScoringConfig::from_path(&args.config_path)?;

    let gap = match config.gap {
        GapModel::Linear { cost } => cost,
        GapModel::Affine { .. } => return Err(GapModelMismatchError { expected: "linear" }.into()),
    };

    let seqs = Sequence::from_fasta(&args.seqs_path, &config.alphabet)?;
    let msa = align::approximate_msa(&seqs, &config.matrix, gap)?;

    let names: Vec<String> = seqs.iter().map(|seq| seq.name.clone()).collect();
    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    write_msa(&mut out, args.output_args.json, &msa, &names, &config.alphabet)
}

pub fn pairwise(args: &PairwiseArgs) -> Result<()> {
    let config = ScoringConfig::from_path(&args.config_path)?;
    let seqs = Sequence::from_fasta(&args.seqs_path, &config.alphabet)?;
    let k = seqs.len();

    let pairs: Vec<(usize, usize)> = (0..k)
        .flat_map(|i| (i + 1..k).map(move |j| (i, j)))
        .collect();

    // every pair is independent
    let pair_costs: Vec<Cost> = pairs
        .par_iter()
        .map(|&(i, j)| match config.gap {
            GapModel::Linear { cost } => global_linear_cost(&seqs[i], &seqs[j], &config.matrix, cost),
            GapModel::Affine { open, extend } => {
                let dp = align::global_affine(&seqs[i], &seqs[j], &config.matrix, open, extend);
                dp.total.get(seqs[i].length, seqs[j].length)
            }
        })
        .collect();

    let mut costs = vec![vec![0; k]; k];
    for (&(i, j), &cost) in pairs.iter().zip(pair_costs.iter()) {
        costs[i][j] = cost;
        costs[j][i] = cost;
    }

    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    if args.output_args.json {
        serde_json::to_writer_pretty(&mut out, &costs)?;
        writeln!(out)?;
    } else {
        for row in &costs {
            let line: Vec<String> = row.iter().map(Cost::to_string).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
    }

    Ok(())
}
