use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "brushinfo",
    about = "Inspect and compare brush preset metadata",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Settings file (TOML) with [classifier] and [report] tables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every parameter of one preset
    Show(ShowArgs),
    /// Compare two presets
    Diff(DiffArgs),
    /// Count matching and differing keys of two presets
    Summary(SummaryArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Metadata entry dump (JSON) of the preset
    pub preset: PathBuf,
}

#[derive(Args)]
pub struct DiffArgs {
    pub first: PathBuf,
    pub second: PathBuf,
    /// List every key, not only the ones that differ
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args)]
pub struct SummaryArgs {
    pub first: PathBuf,
    pub second: PathBuf,
}
