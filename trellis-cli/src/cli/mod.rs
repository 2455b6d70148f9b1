//! Command-line interface orchestration for trellis.
//!
//! The CLI offers a `span` command that loads a graph manifest, builds the
//! minimum spanning forest, and resolves package-code queries against it.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, QueryOutcome, QueryReport, SpanCommand,
    render_summary, run_cli,
};
