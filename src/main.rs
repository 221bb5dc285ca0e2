// src/main.rs
use anyhow::Result;
use clap::Parser;

use man_files::utils::is_broken_pipe;
use man_files::{Args, init_tracing, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        // The reader went away (`man_files | head`); nothing left to report.
        Err(err) if is_broken_pipe(&err) => Ok(()),
        result => result,
    }
}
