// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, run_in};
pub use crate::core::lister::list_man_pages;
pub use crate::core::roots::{BASE_MAN_DIR, FISH_MAN_DIR, resolve_roots};
pub use crate::core::scanner::walk_root;
pub use crate::logging::init_tracing;
pub use crate::models::{ManRoot, OutputMode, RootCount};
