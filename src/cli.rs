// src/cli.rs
mod args;

pub use args::Args;
