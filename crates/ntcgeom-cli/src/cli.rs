use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ntcgeom - Measure, reshape and classify nucleic acid dinucleotide steps against the NtC conformer library.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the reference NtC conformer table.
    Conformers(ConformersArgs),
    /// Measure the step parameters of a dinucleotide step.
    Measure(StepArgs),
    /// Reshape a dinucleotide step to a reference conformer and write the structure.
    Apply(ApplyArgs),
    /// Compare a step against every reference conformer.
    Similarity(StepArgs),
    /// Measure how every conformer of the neighboring steps joins a reshaped step.
    Connectivity(ConnectivityArgs),
    /// Assign a step to an NtC conformer.
    Classify(ClassifyArgs),
    /// Manage the directory holding the NtC classification parameter files.
    Params(ParamsArgs),
}

/// Arguments for the `conformers` subcommand.
#[derive(Args, Debug)]
pub struct ConformersArgs {
    #[command(subcommand)]
    pub command: ConformersCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConformersCommands {
    /// List conformer names, optionally restricted to one class (e.g. 'BB').
    List {
        #[arg(long, value_name = "CLASS")]
        class: Option<String>,
    },
    /// Show the reference parameters of one conformer.
    Show {
        #[arg(required = true)]
        name: String,
    },
}

/// Selects the step starting at one residue of a structure snapshot.
#[derive(Args, Debug, Clone)]
pub struct StepArgs {
    /// Path to the input structure snapshot (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Chain of the first residue of the step.
    #[arg(long, required = true, value_name = "ID")]
    pub chain: String,

    /// Sequence number of the first residue of the step.
    #[arg(long, required = true, value_name = "INT", allow_negative_numbers = true)]
    pub residue: isize,

    /// Insertion code of the first residue.
    #[arg(long, value_name = "CHAR")]
    pub ins_code: Option<char>,

    /// Alternate conformation of the first residue. All of them when omitted.
    #[arg(long, value_name = "CHAR")]
    pub alt1: Option<char>,

    /// Alternate conformation of the second residue. All of them when omitted.
    #[arg(long, value_name = "CHAR")]
    pub alt2: Option<char>,
}

/// Arguments for the `apply` subcommand.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Name of the conformer to apply (e.g. 'BB00').
    #[arg(short, long, required = true, value_name = "NAME")]
    pub ntc: String,

    /// Path for the output structure snapshot.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `connectivity` subcommand.
#[derive(Args, Debug)]
pub struct ConnectivityArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Conformer the selected step is reshaped to.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub ntc: String,

    /// Only report the N best joining conformers per neighbor.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Directory with the classification parameter files, overriding the config file
    /// and the managed data directory.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `params` subcommand.
#[derive(Args, Debug)]
pub struct ParamsArgs {
    #[command(subcommand)]
    pub command: ParamsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ParamsCommands {
    /// Show the absolute path to the parameters directory.
    Path,
    /// Set a custom path for the parameters directory.
    SetPath {
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the parameters path to its default, OS-specific location.
    ResetPath,
    /// Verify that the parameters directory holds every required file.
    Check,
}
