#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::icons;
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Icons { source, out_dir, strict } => {
            icons::generate_icons(&source, &out_dir, strict)?;
        }
    }

    Ok(())
}
