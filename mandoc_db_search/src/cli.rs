// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::db::Database;

const QUIT_COMMAND: &str = "quit";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the mandoc.db file to inspect
    pub database: PathBuf,

    /// Look up a single page name and exit instead of prompting
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Reads the database named in `args` and runs a lookup or an interactive
/// session on stdin/stdout.
///
/// # Errors
///
/// This function returns an error if:
/// * The database file cannot be read
/// * The file is not a valid mandoc.db
/// * Reading stdin or writing stdout fails
#[inline]
pub fn run(args: &Args) -> Result<()> {
    let bytes = fs::read(&args.database)
        .with_context(|| format!("Failed to read database: {}", args.database.display()))?;
    let db = Database::parse(&bytes)
        .with_context(|| format!("Failed to parse database: {}", args.database.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.search {
        Some(query) => db.write_search(query, &mut out)?,
        None => prompt_loop(&db, &mut io::stdin().lock(), &mut out)?,
    }
    Ok(())
}

/// Prints the intro, then answers one name per line until `quit` or end of
/// input. Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
#[inline]
pub fn prompt_loop<R: BufRead, W: Write>(db: &Database<'_>, input: &mut R, out: &mut W) -> Result<()> {
    db.write_intro(out)?;
    let mut line = String::with_capacity(100);

    loop {
        write!(out, "SEARCH: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(());
        }
        db.write_search(query, out)?;
    }
}
