//! Presentation layer for diabetes-risk
//!
//! This crate contains the CLI definition, report formatting,
//! and the interactive form.

pub mod cli;
pub mod form;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use form::{AnswerError, FormRepl, collect_answers};
pub use output::console::ConsoleFormatter;
pub use output::report::RiskReport;
