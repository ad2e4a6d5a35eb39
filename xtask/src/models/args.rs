//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Campus workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Generate the site icon set from the master artwork
    Icons {
        /// Source image (square, ideally 512px or larger)
        #[arg(short, long, default_value = "assets/icon.png")]
        source: PathBuf,
        /// Output directory served as the static root
        #[arg(short, long, default_value = "public")]
        out_dir: PathBuf,
        /// Fail the build on any error instead of logging and exiting 0
        #[arg(long)]
        strict: bool,
    },
}
