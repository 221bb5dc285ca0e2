// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

use crate::core::lister::list_man_pages;
use crate::core::roots::resolve_roots;
use crate::models::{OutputMode, RootCount};

const BASE_DIR_NOTE: &str = "The base man directory is always scanned.";

#[derive(Parser, Debug, Default)]
#[command(author, about, long_about = None, after_help = BASE_DIR_NOTE)]
pub struct Args {
    /// Print how many files each man directory contains
    #[arg(short, long)]
    pub count: bool,

    /// Also scan the fish shell man directory
    #[arg(short, long)]
    pub fishpath: bool,

    /// Print file names instead of full paths (ignored with --count)
    #[arg(short, long)]
    pub names: bool,
}

impl Args {
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        OutputMode::from_flags(self.count, self.names)
    }
}

/// Lists the manual pages next to the current user's home directory on stdout.
///
/// # Errors
///
/// This function returns an error if:
/// * The home directory cannot be determined
/// * Writing to stdout fails
#[inline]
pub fn run(args: &Args) -> Result<()> {
    let home = dirs::home_dir().context("Failed to determine the home directory")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_in(args, &home, &mut out)?;
    Ok(())
}

/// Lists the manual pages next to `home` on `out`.
///
/// # Errors
///
/// This function returns an error if writing to `out` fails.
#[inline]
pub fn run_in<W: Write>(args: &Args, home: &Path, out: &mut W) -> Result<Vec<RootCount>> {
    let roots = resolve_roots(home, args.fishpath);
    let counts = list_man_pages(&roots, args.mode(), out)?;
    out.flush().context("Failed to flush output")?;
    Ok(counts)
}
