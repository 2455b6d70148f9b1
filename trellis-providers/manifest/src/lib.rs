//! Manifest provider: parses the textual graph description into a [`Graph`].
//!
//! The manifest is a whitespace-separated token stream. The first two tokens
//! are the vertex count `V` and the edge count `E`, followed by exactly `E`
//! records of `source target weight package_code`; records may span lines.
//! This layer owns all input validation; the core assumes well-formed
//! graphs with in-range vertex indices.

use std::io::{self, BufRead};

use thiserror::Error;
use trellis_core::Graph;

/// Errors raised while parsing a graph manifest.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// Reading from the underlying source failed.
    #[error("failed to read manifest: {source}")]
    Io {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The `V E` header was missing or incomplete.
    #[error("manifest header must contain vertex and edge counts")]
    MissingHeader,
    /// A numeric token could not be parsed.
    #[error("malformed {field} token `{token}` in record {record}")]
    MalformedToken {
        /// Name of the field being parsed.
        field: &'static str,
        /// The raw offending token.
        token: String,
        /// One-based record number; 0 denotes the header.
        record: usize,
    },
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("record {record} references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// One-based record number.
        record: usize,
        /// The out-of-range vertex index.
        vertex: usize,
        /// The declared number of vertices.
        vertex_count: usize,
    },
    /// The input ended before the declared number of records was read.
    #[error("manifest declares {expected} edges but ends after {found}")]
    Truncated {
        /// The edge count declared in the header.
        expected: usize,
        /// Complete records read before the input ended.
        found: usize,
    },
    /// Tokens remained after the declared records were consumed.
    #[error("manifest contains data beyond the declared {expected} edges")]
    TrailingData {
        /// The edge count declared in the header.
        expected: usize,
    },
}

impl ManifestError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ManifestErrorCode {
        match self {
            Self::Io { .. } => ManifestErrorCode::Io,
            Self::MissingHeader => ManifestErrorCode::MissingHeader,
            Self::MalformedToken { .. } => ManifestErrorCode::MalformedToken,
            Self::VertexOutOfRange { .. } => ManifestErrorCode::VertexOutOfRange,
            Self::Truncated { .. } => ManifestErrorCode::Truncated,
            Self::TrailingData { .. } => ManifestErrorCode::TrailingData,
        }
    }
}

/// Machine-readable error codes for [`ManifestError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ManifestErrorCode {
    /// Reading from the underlying source failed.
    Io,
    /// The `V E` header was missing or incomplete.
    MissingHeader,
    /// A numeric token could not be parsed.
    MalformedToken,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    VertexOutOfRange,
    /// The input ended before the declared number of records was read.
    Truncated,
    /// Tokens remained after the declared records were consumed.
    TrailingData,
}

impl ManifestErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "MANIFEST_IO",
            Self::MissingHeader => "MANIFEST_MISSING_HEADER",
            Self::MalformedToken => "MANIFEST_MALFORMED_TOKEN",
            Self::VertexOutOfRange => "MANIFEST_VERTEX_OUT_OF_RANGE",
            Self::Truncated => "MANIFEST_TRUNCATED",
            Self::TrailingData => "MANIFEST_TRAILING_DATA",
        }
    }
}

/// A parsed manifest: a named graph ready for spanning-forest construction.
#[derive(Clone, Debug)]
pub struct Manifest {
    name: String,
    graph: Graph,
}

impl Manifest {
    /// Parses a manifest from a buffered reader.
    ///
    /// # Errors
    /// Returns [`ManifestError::Io`] when the reader fails, or any of the
    /// parse errors described on [`ManifestError`].
    pub fn from_reader(
        name: impl Into<String>,
        mut reader: impl BufRead,
    ) -> Result<Self, ManifestError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| ManifestError::Io { source })?;
        Self::parse(name, &text)
    }

    /// Parses a manifest from in-memory text.
    ///
    /// # Errors
    /// Returns a [`ManifestError`] describing the first malformation found.
    ///
    /// # Examples
    /// ```
    /// use trellis_providers_manifest::Manifest;
    ///
    /// let manifest = Manifest::parse("demo", "2 1\n0 1 5 AB\n")?;
    /// assert_eq!(manifest.graph().vertex_count(), 2);
    /// assert_eq!(manifest.graph().edge_count(), 1);
    /// # Ok::<(), trellis_providers_manifest::ManifestError>(())
    /// ```
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, ManifestError> {
        let mut tokens = text.split_whitespace();

        let vertex_token = tokens.next().ok_or(ManifestError::MissingHeader)?;
        let edge_token = tokens.next().ok_or(ManifestError::MissingHeader)?;
        let vertex_count: usize = parse_number(vertex_token, "vertex_count", 0)?;
        let declared_edges: usize = parse_number(edge_token, "edge_count", 0)?;

        let mut graph = Graph::new(vertex_count);
        for record in 1..=declared_edges {
            let found = record - 1;
            let source_token = require(tokens.next(), declared_edges, found)?;
            let target_token = require(tokens.next(), declared_edges, found)?;
            let weight_token = require(tokens.next(), declared_edges, found)?;
            let package_code = require(tokens.next(), declared_edges, found)?;

            let source: usize = parse_number(source_token, "source", record)?;
            let target: usize = parse_number(target_token, "target", record)?;
            let weight: i64 = parse_number(weight_token, "weight", record)?;

            for vertex in [source, target] {
                if vertex >= vertex_count {
                    return Err(ManifestError::VertexOutOfRange {
                        record,
                        vertex,
                        vertex_count,
                    });
                }
            }

            graph.add_edge(source, target, weight, package_code);
        }

        if tokens.next().is_some() {
            return Err(ManifestError::TrailingData {
                expected: declared_edges,
            });
        }

        Ok(Self {
            name: name.into(),
            graph,
        })
    }

    /// Returns the data-source name supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the parsed graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the manifest, yielding the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn require<'a>(
    token: Option<&'a str>,
    expected: usize,
    found: usize,
) -> Result<&'a str, ManifestError> {
    token.ok_or(ManifestError::Truncated { expected, found })
}

fn parse_number<T: std::str::FromStr>(
    token: &str,
    field: &'static str,
    record: usize,
) -> Result<T, ManifestError> {
    token.parse().map_err(|_| ManifestError::MalformedToken {
        field,
        token: token.to_owned(),
        record,
    })
}
