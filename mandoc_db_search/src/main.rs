// src/main.rs
use anyhow::Result;
use clap::Parser;

use mandoc_db_search::{Args, init_tracing, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    run(&args)
}
