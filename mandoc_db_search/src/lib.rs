// src/lib.rs
pub mod cli;
pub mod db;
pub mod logging;

pub use crate::cli::{Args, prompt_loop, run};
pub use crate::db::Database;
pub use crate::db::macros::{MacroTable, MacroValue, Macros};
pub use crate::db::pages::{Name, Page, PageFormat, Pages};
pub use crate::logging::init_tracing;
