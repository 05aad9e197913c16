use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::schema::v1::Mode;

#[derive(Debug, Parser)]
#[command(
    name = "diskfit",
    version,
    about = "Fit disk diffusion breakpoints against MIC breakpoints"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit cutoffs, compute error tables and write reports.
    Run(RunArgs),
    /// Report whether the test column looks like disk zones or MICs.
    Detect(DetectArgs),
    /// Parse the dataset and cutoffs without fitting.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct CutoffArgs {
    #[arg(long, default_value = "4", help = "MIC susceptible breakpoint (<=)")]
    pub mic_s: String,

    #[arg(long, default_value = "16", help = "MIC resistant breakpoint (>=)")]
    pub mic_r: String,

    #[arg(long, default_value = "32", help = "Manual susceptible cutoff for the test column")]
    pub x_s: String,

    #[arg(long, default_value = "12", help = "Manual resistant cutoff for the test column")]
    pub x_r: String,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Two-column CSV (MIC,test value), optionally .gz")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ModeArg::Disk)]
    pub mode: ModeArg,

    #[arg(
        long,
        default_value_t = false,
        help = "Use --x-s/--x-r instead of fitting (disk mode only)"
    )]
    pub manual: bool,

    #[command(flatten)]
    pub cutoffs: CutoffArgs,

    #[arg(long)]
    pub strain: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub csv: bool,
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = ModeArg::Disk)]
    pub mode: ModeArg,

    #[command(flatten)]
    pub cutoffs: CutoffArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Disk,
    MicVsMic,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Disk => Mode::Disk,
            ModeArg::MicVsMic => Mode::MicVsMic,
        }
    }
}

impl CutoffArgs {
    pub fn texts(&self) -> crate::config::CutoffTexts {
        crate::config::CutoffTexts {
            mic_s: self.mic_s.clone(),
            mic_r: self.mic_r.clone(),
            x_s: self.x_s.clone(),
            x_r: self.x_r.clone(),
        }
    }
}
