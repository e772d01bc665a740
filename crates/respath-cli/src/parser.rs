//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use respath_core::Platform;

use crate::commands::Commands;

/// Inspect how logical resource names resolve to files on this machine.
#[derive(Parser)]
#[command(name = "respath")]
#[command(about = "Resolve game resources and list installed locale packs")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON) providing the selected language
    #[arg(long, global = true, env = "RESPATH_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Layout file (JSON) overriding directory and marker names
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    /// Language to resolve with, overriding the settings file
    #[arg(short = 'l', long, global = true)]
    pub language: Option<String>,

    /// Search strategy to use instead of the one for this build target
    #[arg(long, global = true, value_parser = parse_platform)]
    pub platform: Option<Platform>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_platform(raw: &str) -> Result<Platform, String> {
    raw.parse().map_err(|e: respath_core::PathError| e.to_string())
}
