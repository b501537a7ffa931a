use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use libaster::align::DEFAULT_MAX_CELLS;

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Align two sequences under a linear gap model")]
    GlobalLinear(GlobalLinearArgs),
    #[command(about = "Align two sequences under an affine gap model")]
    GlobalAffine(GlobalAffineArgs),
    #[command(about = "Optimally align k sequences by exact dynamic programming")]
    ExactMsa(MsaArgs),
    #[command(about = "Align k sequences with the center-star 2-approximation")]
    ApproxMsa(MsaArgs),
    #[command(about = "Compute the pairwise alignment cost of every sequence pair")]
    Pairwise(PairwiseArgs),
    #[command(about = "Write random DNA sequences as FASTA")]
    Simulate(SimulateArgs),
}

#[derive(Parser)]
#[command(name = "aster")]
#[command(about = "Global alignment of biological sequences, exactly or center-star approximated")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to place the output; defaults to stdout
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    pub outfile_path: Option<PathBuf>,

    /// Write the result as JSON instead of FASTA
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Allow aster to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug)]
pub struct GlobalLinearArgs {
    /// The file with the first sequence
    #[arg(value_name = "SEQ_1.fasta")]
    pub seq_1_path: PathBuf,

    /// The file with the second sequence
    #[arg(value_name = "SEQ_2.fasta")]
    pub seq_2_path: PathBuf,

    /// The scoring configuration file
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// Also report one optimal alignment, not only its cost
    #[arg(long = "print-alignment", default_value_t = false)]
    pub print_alignment: bool,

    /// Compute the cost in linear space (implies cost-only output)
    #[arg(long = "linear-space", default_value_t = false)]
    pub linear_space: bool,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug)]
pub struct GlobalAffineArgs {
    /// The file with the first sequence
    #[arg(value_name = "SEQ_1.fasta")]
    pub seq_1_path: PathBuf,

    /// The file with the second sequence
    #[arg(value_name = "SEQ_2.fasta")]
    pub seq_2_path: PathBuf,

    /// The scoring configuration file
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// Also report one optimal alignment, not only its cost
    #[arg(long = "print-alignment", default_value_t = false)]
    pub print_alignment: bool,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MsaArgs {
    /// The file with the sequences to align
    #[arg(value_name = "SEQS.fasta")]
    pub seqs_path: PathBuf,

    /// The scoring configuration file
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// The ceiling on the number of cost tensor cells (exact engine only)
    #[arg(long = "max-cells", default_value_t = DEFAULT_MAX_CELLS)]
    pub max_cells: usize,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug)]
pub struct PairwiseArgs {
    /// The file with the sequences to compare
    #[arg(value_name = "SEQS.fasta")]
    pub seqs_path: PathBuf,

    /// The scoring configuration file
    #[arg(value_name = "CONFIG")]
    pub config_path: PathBuf,

    /// The number of threads that aster will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// The number of sequences to draw
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// The length of each sequence
    #[arg(value_name = "LENGTH")]
    pub length: usize,

    /// The random generator seed
    #[arg(long = "seed", default_value_t = 42u64)]
    pub seed: u64,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}
