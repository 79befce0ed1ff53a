//! Command Line Interface (CLI) layer for PACKSHOT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the render, process, and trim
//! stages, in single-file and batch flavors. It wires user-provided options
//! to the underlying library functionality exposed via `packshot::api`.
//!
//! If you are embedding PACKSHOT into another application, prefer using
//! the high-level `packshot::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
