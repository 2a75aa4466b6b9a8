//! CLI argument definitions for the CommuneData dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "communedata",
    version,
    about = "CommuneData - explore French commune statistics",
    long_about = "Load the commune statistics CSV (fusion.csv) and query it:\n\
                  look up a commune profile, search codes, rank natural growth,\n\
                  and aggregate dataset-wide totals."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the dataset CSV.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = "public/fusion.csv",
        global = true
    )]
    pub data: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Show the full statistics profile of one commune.
    Profile(ProfileArgs),

    /// Search commune codes by substring.
    Search(SearchArgs),

    /// Rank communes by natural growth.
    Top(TopArgs),

    /// Print dataset-wide totals.
    Totals,

    /// List communes as a sortable, filterable table.
    List(ListArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Commune code (CODGEO), with or without leading zeros.
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Term matched against codes and population figures.
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Maximum number of suggestions.
    #[arg(long = "limit", value_name = "N", default_value_t = commune_engine::DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct TopArgs {
    /// Number of communes to rank.
    #[arg(long = "limit", value_name = "N", default_value_t = commune_engine::DEFAULT_TOP_LIMIT)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Sort column.
    #[arg(long = "sort", value_enum, default_value = "code")]
    pub sort: SortArg,

    /// Sort descending instead of ascending.
    #[arg(long = "desc")]
    pub desc: bool,

    /// Keep only communes matching this term.
    #[arg(long = "filter", value_name = "TERM")]
    pub filter: Option<String>,

    /// Cap the number of printed rows.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

/// Sortable columns of the listing.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Code,
    Population,
    Area,
    Births,
    Deaths,
    Housing,
    VacantHousing,
    Income,
    Unemployed,
    Active,
    Men,
    Women,
    SelfEmployed,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
