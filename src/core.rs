// src/core.rs
pub mod lister;
pub mod roots;
pub mod scanner;
