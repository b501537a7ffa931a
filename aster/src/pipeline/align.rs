use anyhow::Result;

use libaster::align::structs::Msa;
use libaster::align::{align_affine, align_linear, global_linear as lib_global_linear, global_linear_cost};
use libaster::scoring::{GapModel, ScoringConfig};

use crate::args::{GlobalAffineArgs, GlobalLinearArgs};
use crate::extension_traits::open_output;
use crate::pipeline::{first_record, write_cost, write_msa, GapModelMismatchError};

pub fn global_linear(args: &GlobalLinearArgs) -> Result<()> {
    let config = ScoringConfig::from_path(&args.config_path)?;

    let gap = match config.gap {
        GapModel::Linear { cost } => cost,
        GapModel::Affine { .. } => return Err(GapModelMismatchError { expected: "linear" }.into()),
    };

    let x = first_record(&args.seq_1_path, &config.alphabet)?;
    let y = first_record(&args.seq_2_path, &config.alphabet)?;

    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    if args.linear_space || !args.print_alignment {
        let cost = if args.linear_space {
            global_linear_cost(&x, &y, &config.matrix, gap)
        } else {
            lib_global_linear(&x, &y, &config.matrix, gap).get(x.length, y.length)
        };

        return write_cost(&mut out, args.output_args.json, cost);
    }

    let (cost, alignment) = align_linear(&x, &y, &config.matrix, gap);
    write_msa(
        &mut out,
        args.output_args.json,
        &Msa { cost, alignment },
        &[x.name.clone(), y.name.clone()],
        &config.alphabet,
    )
}

pub fn global_affine(args: &GlobalAffineArgs) -> Result<()> {
    let config = ScoringConfig::from_path(&args.config_path)?;

    let (open, extend) = match config.gap {
        GapModel::Affine { open, extend } => (open, extend),
        GapModel::Linear { .. } => return Err(GapModelMismatchError { expected: "affine" }.into()),
    };

    let x = first_record(&args.seq_1_path, &config.alphabet)?;
    let y = first_record(&args.seq_2_path, &config.alphabet)?;

    let (cost, alignment) = align_affine(&x, &y, &config.matrix, open, extend);

    let mut out = open_output(&args.output_args.outfile_path, args.output_args.allow_overwrite)?;

    if !args.print_alignment {
        return write_cost(&mut out, args.output_args.json, cost);
    }

    write_msa(
        &mut out,
        args.output_args.json,
        &Msa { cost, alignment },
        &[x.name.clone(), y.name.clone()],
        &config.alphabet,
    )
}
