// src/models.rs
mod man_root;
mod output_mode;
mod root_count;

pub use man_root::ManRoot;
pub use output_mode::OutputMode;
pub use root_count::RootCount;
