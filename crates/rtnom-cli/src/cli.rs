//! CLI argument definitions for the structure nomenclature mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rtnom_model::Laterality;

#[derive(Parser)]
#[command(
    name = "rtnom",
    version,
    about = "RT Structure Nomenclature Mapper - Standardize structure set names",
    long_about = "Map raw anatomical structure labels to a standardized nomenclature.\n\n\
                  Suggests the closest formalized structure for each raw label and\n\
                  composes canonical names from laterality, margin, and dose attributes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map raw structure labels to standardized names.
    Map(MapArgs),

    /// Compose a single standardized name from explicit attributes.
    Compose(ComposeArgs),

    /// List the formalized-structure catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// JSON file mapping raw structure keys to their original labels.
    #[arg(value_name = "RAW_FILE")]
    pub raw_file: PathBuf,

    /// Formalized-structure catalog (JSON array of identifier/display_name).
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Category sets driving attribute eligibility (JSON).
    #[arg(long, value_name = "FILE")]
    pub categories: PathBuf,

    /// Write the full mapping table to this JSON file.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minimum similarity for an initial suggestion (0.0-1.0).
    #[arg(long, value_name = "SCORE", default_value_t = rtnom_map::DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Skip suggestion and seed every label with the first catalog entry.
    #[arg(long = "no-suggest")]
    pub no_suggest: bool,
}

#[derive(Parser)]
pub struct ComposeArgs {
    /// Base identifier (canonical structure code).
    #[arg(long, value_name = "ID")]
    pub identifier: String,

    /// Laterality qualifier.
    #[arg(long, value_enum, conflicts_with_all = ["instance", "free_text"])]
    pub laterality: Option<LateralityArg>,

    /// Instance index for multi-instance structures (1-9).
    #[arg(long, value_name = "N", conflicts_with = "free_text")]
    pub instance: Option<u8>,

    /// Free-text descriptor (marks the name as non-standard).
    #[arg(long = "free-text", value_name = "TEXT")]
    pub free_text: Option<String>,

    /// Margin: a width in millimetres (0-99) or a preset ("0", "nonuniform").
    #[arg(long, value_name = "VALUE")]
    pub margin: Option<String>,

    /// Dose in centigray (0-90000).
    #[arg(long, value_name = "CGY")]
    pub dose: Option<u32>,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Formalized-structure catalog (JSON).
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Category sets (JSON); adds per-structure eligibility columns.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LateralityArg {
    Left,
    Right,
}

impl From<LateralityArg> for Laterality {
    fn from(value: LateralityArg) -> Self {
        match value {
            LateralityArg::Left => Laterality::Left,
            LateralityArg::Right => Laterality::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
