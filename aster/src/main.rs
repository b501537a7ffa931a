mod args;
mod extension_traits;
mod pipeline;
mod util;

use args::{Cli, SubCommands};
use pipeline::{approx_msa, exact_msa, global_affine, global_linear, pairwise, simulate};
use util::set_threads;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        SubCommands::GlobalLinear(args) => {
            global_linear(&args)?;
        }
        SubCommands::GlobalAffine(args) => {
            global_affine(&args)?;
        }
        SubCommands::ExactMsa(args) => {
            exact_msa(&args)?;
        }
        SubCommands::ApproxMsa(args) => {
            approx_msa(&args)?;
        }
        SubCommands::Pairwise(args) => {
            set_threads(args.num_threads)?;
            pairwise(&args)?;
        }
        SubCommands::Simulate(args) => {
            simulate(&args)?;
        }
    }
    Ok(())
}
