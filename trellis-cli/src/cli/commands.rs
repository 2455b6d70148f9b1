//! Command implementations and argument parsing for the trellis CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use trellis_core::{Edge, LookupOutcome, PackageLookup, kruskal};
use trellis_providers_manifest::{Manifest, ManifestError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "trellis",
    about = "Build a minimum spanning tree and look up package codes."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the spanning forest from a graph manifest.
    Span(SpanCommand),
}

/// Options accepted by the `span` command.
#[derive(Debug, Args, Clone)]
pub struct SpanCommand {
    /// Path to the graph manifest.
    pub path: PathBuf,

    /// Package codes to resolve against the constructed forest.
    #[arg(long = "query")]
    pub queries: Vec<String>,

    /// Seed for treap priorities; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the manifest.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Manifest parsing failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Outcome of one `--query` resolution, owned for rendering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum QueryOutcome {
    /// The edge was selected into the forest.
    InTree {
        /// Source vertex of the matched edge.
        source: usize,
        /// Target vertex of the matched edge.
        target: usize,
        /// Weight of the matched edge.
        weight: i64,
    },
    /// The code exists in the input, but its edge was not selected.
    OutsideTree,
    /// The code does not appear in the input.
    Unknown,
}

/// A resolved query, pairing the code with its classification.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QueryReport {
    /// The queried package code.
    pub package_code: String,
    /// Its classification.
    pub outcome: QueryOutcome,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the manifest.
    pub data_source: String,
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights.
    pub total_weight: i64,
    /// Connected components remaining in the forest.
    pub component_count: usize,
    /// Query resolutions in request order.
    pub queries: Vec<QueryReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or parsing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use trellis_cli::cli::{Cli, Command, SpanCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n0 1 4 AB\n1 2 2 BC\n")?;
/// let cli = Cli {
///     command: Command::Span(SpanCommand {
///         path: file.path().to_path_buf(),
///         queries: vec!["AB".into()],
///         seed: Some(7),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.edges.len(), 2);
/// assert_eq!(summary.total_weight, 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Span(span) => {
            Span::current().record("command", field::display("span"));
            run_span(span)
        }
    }
}

#[instrument(
    name = "cli.span",
    err,
    skip(command),
    fields(path = field::Empty, queries = field::Empty, seed = field::Empty),
)]
pub(super) fn run_span(command: SpanCommand) -> Result<ExecutionSummary, CliError> {
    let SpanCommand {
        path,
        queries,
        seed,
        name,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("queries", queries.len());
    span.record("seed", field::debug(&seed));

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_manifest_reader(&path)?;
    let manifest = Manifest::from_reader(chosen_name, reader)?;
    let graph = manifest.graph();

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let forest = kruskal(graph, &mut rng);
    let known_codes = graph.package_codes();
    let lookup = PackageLookup::new(forest.index(), &known_codes);

    let query_reports = queries
        .into_iter()
        .map(|package_code| {
            let outcome = match lookup.lookup(&package_code) {
                LookupOutcome::InTree(edge) => QueryOutcome::InTree {
                    source: edge.source(),
                    target: edge.target(),
                    weight: edge.weight(),
                },
                LookupOutcome::OutsideTree => QueryOutcome::OutsideTree,
                LookupOutcome::Unknown => QueryOutcome::Unknown,
            };
            QueryReport {
                package_code,
                outcome,
            }
        })
        .collect();

    info!(
        data_source = manifest.name(),
        accepted = forest.edges().len(),
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "span command completed"
    );

    Ok(ExecutionSummary {
        data_source: manifest.name().to_owned(),
        vertex_count: graph.vertex_count(),
        edges: forest.edges().to_vec(),
        total_weight: forest.total_weight(),
        component_count: forest.component_count(),
        queries: query_reports,
    })
}

#[instrument(name = "cli.open_manifest", err, fields(path = field::Empty))]
pub(super) fn open_manifest_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    override_name.map(ToOwned::to_owned).unwrap_or_else(|| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("manifest")
            .to_owned()
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "spanning edges: {}", summary.edges.len())?;
    for edge in &summary.edges {
        writeln!(
            writer,
            "{} - {}  weight {}  package {}",
            edge.source(),
            edge.target(),
            edge.weight(),
            edge.package_code()
        )?;
    }
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    writeln!(writer, "components: {}", summary.component_count)?;
    for report in &summary.queries {
        match &report.outcome {
            QueryOutcome::InTree {
                source,
                target,
                weight,
            } => writeln!(
                writer,
                "package {}: in tree, connects {source} - {target}, weight {weight}",
                report.package_code
            )?,
            QueryOutcome::OutsideTree => writeln!(
                writer,
                "package {}: known, outside tree",
                report.package_code
            )?,
            QueryOutcome::Unknown => {
                writeln!(writer, "package {}: unknown", report.package_code)?;
            }
        }
    }
    Ok(())
}
