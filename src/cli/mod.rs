//! Command Line Interface (CLI) layer for stickerfit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a batch run. It wires
//! user-provided options to `stickerfit::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
