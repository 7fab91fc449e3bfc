//! Loader for the line-based network description format.
//!
//! The first non-blank line holds the vertex count `V`. Every following
//! non-blank line describes one link as `<from> <to> <cable> <bandwidth>
//! <length>`, separated by whitespace. Loading is atomic: either every line
//! is accepted and a [`NetworkDescription`] is returned, or the first failure
//! is reported with its 1-based line number.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use netweave_core::{Edge, EdgeError, Graph, GraphError, Orientation};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading a network description.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// The input held no vertex count.
    #[error("network description is empty")]
    EmptyInput,
    /// The first line was not a non-negative integer.
    #[error("line {line}: expected a non-negative vertex count, found `{raw}`")]
    InvalidVertexCount {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        raw: String,
    },
    /// The vertex count was too large to allocate a graph for.
    #[error("line {line}: vertex count {vertex_count} is too large to load")]
    VertexCountTooLarge {
        /// 1-based line number.
        line: usize,
        /// The requested vertex count.
        vertex_count: usize,
    },
    /// A link line did not have exactly five tokens.
    #[error("line {line}: expected 5 tokens `<from> <to> <cable> <bandwidth> <length>`, found {found}")]
    WrongTokenCount {
        /// 1-based line number.
        line: usize,
        /// Number of tokens present.
        found: usize,
    },
    /// An endpoint was not an integer.
    #[error("line {line}: `{token}` is not an integer vertex")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A bandwidth or length was not a number.
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The link attributes failed validation.
    #[error("line {line}: {source}")]
    InvalidEdge {
        /// 1-based line number.
        line: usize,
        /// Validation failure from the edge model.
        #[source]
        source: EdgeError,
    },
    /// The link referenced a vertex outside `[0, V)`.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number.
        line: usize,
        /// Insertion failure from the graph store.
        #[source]
        source: GraphError,
    },
    /// Reading the input failed.
    #[error("line {line}: i/o error: {source}")]
    Io {
        /// 1-based number of the line being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The description file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

netweave_core::define_error_codes! {
    /// Stable codes describing [`DescriptionError`] variants.
    enum DescriptionErrorCode for DescriptionError {
        /// The input held no vertex count.
        EmptyInput => EmptyInput => "DESCRIPTION_EMPTY_INPUT",
        /// The vertex count was malformed.
        InvalidVertexCount => InvalidVertexCount { .. } => "DESCRIPTION_INVALID_VERTEX_COUNT",
        /// The vertex count could not be allocated.
        VertexCountTooLarge => VertexCountTooLarge { .. } => "DESCRIPTION_VERTEX_COUNT_TOO_LARGE",
        /// A link line had the wrong number of tokens.
        WrongTokenCount => WrongTokenCount { .. } => "DESCRIPTION_WRONG_TOKEN_COUNT",
        /// An endpoint was not an integer.
        InvalidInteger => InvalidInteger { .. } => "DESCRIPTION_INVALID_INTEGER",
        /// A bandwidth or length was not a number.
        InvalidNumber => InvalidNumber { .. } => "DESCRIPTION_INVALID_NUMBER",
        /// The link attributes failed validation.
        InvalidEdge => InvalidEdge { .. } => "DESCRIPTION_INVALID_EDGE",
        /// A link endpoint was out of range.
        Graph => Graph { .. } => "DESCRIPTION_VERTEX_OUT_OF_RANGE",
        /// Reading failed.
        Io => Io { .. } => "DESCRIPTION_IO",
        /// Opening the file failed.
        Open => Open { .. } => "DESCRIPTION_OPEN",
    }
}

impl DescriptionError {
    /// Returns the 1-based line the error refers to, when it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidVertexCount { line, .. }
            | Self::VertexCountTooLarge { line, .. }
            | Self::WrongTokenCount { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidEdge { line, .. }
            | Self::Graph { line, .. }
            | Self::Io { line, .. } => Some(*line),
            Self::EmptyInput | Self::Open { .. } => None,
        }
    }
}

/// A named network loaded from a description.
#[derive(Clone, Debug)]
pub struct NetworkDescription {
    name: String,
    graph: Graph,
}

impl NetworkDescription {
    /// Parses a description into a directed graph.
    ///
    /// # Errors
    /// Returns [`DescriptionError`] on the first malformed line or read
    /// failure; no partial graph is produced.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use netweave_providers_text::NetworkDescription;
    ///
    /// let raw = "3\n0 1 copper 10 5\n1 2 fiber 5 10\n";
    /// let description = NetworkDescription::try_from_reader("demo", Cursor::new(raw))?;
    /// assert_eq!(description.name(), "demo");
    /// assert_eq!(description.graph().vertex_count(), 3);
    /// assert_eq!(description.graph().edge_count(), 2);
    /// # Ok::<(), netweave_providers_text::DescriptionError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, DescriptionError> {
        Self::try_from_reader_with_orientation(name, reader, Orientation::Directed)
    }

    /// Parses a description, storing links with the given orientation.
    ///
    /// # Errors
    /// Returns [`DescriptionError`] under the same rules as
    /// [`NetworkDescription::try_from_reader`].
    pub fn try_from_reader_with_orientation<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        orientation: Orientation,
    ) -> Result<Self, DescriptionError> {
        let name = name.into();
        let graph = parse(&name, reader, orientation)?;
        Ok(Self { name, graph })
    }

    /// Opens `path` and parses it as a directed network named after the file.
    ///
    /// # Errors
    /// Returns [`DescriptionError::Open`] when the file cannot be opened and
    /// any parse error otherwise.
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        Self::try_from_path_with_orientation(path, Orientation::Directed)
    }

    /// Opens `path` and parses it with the given orientation.
    ///
    /// # Errors
    /// Returns [`DescriptionError::Open`] when the file cannot be opened and
    /// any parse error otherwise.
    pub fn try_from_path_with_orientation(
        path: impl AsRef<Path>,
        orientation: Orientation,
    ) -> Result<Self, DescriptionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DescriptionError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned());
        Self::try_from_reader_with_orientation(name, BufReader::new(file), orientation)
    }

    /// Returns the network name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the description and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[instrument(name = "providers.text.parse", err, skip(reader))]
fn parse<R: BufRead>(
    name: &str,
    reader: R,
    orientation: Orientation,
) -> Result<Graph, DescriptionError> {
    let mut graph: Option<Graph> = None;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let text = line.map_err(|source| DescriptionError::Io {
            line: line_no,
            source,
        })?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(graph) = &mut graph {
            let edge = parse_edge(line_no, trimmed)?;
            graph
                .add_edge(edge)
                .map_err(|source| DescriptionError::Graph {
                    line: line_no,
                    source,
                })?;
        } else {
            let vertex_count = parse_vertex_count(line_no, trimmed)?;
            let empty = Graph::try_with_orientation(vertex_count, orientation).map_err(|_| {
                DescriptionError::VertexCountTooLarge {
                    line: line_no,
                    vertex_count,
                }
            })?;
            graph = Some(empty);
        }
    }
    let graph = graph.ok_or(DescriptionError::EmptyInput)?;
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "network description parsed"
    );
    Ok(graph)
}

fn parse_vertex_count(line: usize, raw: &str) -> Result<usize, DescriptionError> {
    raw.parse::<usize>()
        .map_err(|_| DescriptionError::InvalidVertexCount {
            line,
            raw: raw.to_owned(),
        })
}

fn parse_edge(line: usize, raw: &str) -> Result<Edge, DescriptionError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [from, to, cable, bandwidth, length] = tokens[..] else {
        return Err(DescriptionError::WrongTokenCount {
            line,
            found: tokens.len(),
        });
    };
    Edge::new(
        parse_integer(line, from)?,
        parse_integer(line, to)?,
        parse_number(line, bandwidth)?,
        parse_number(line, length)?,
        cable,
    )
    .map_err(|source| DescriptionError::InvalidEdge { line, source })
}

fn parse_integer(line: usize, token: &str) -> Result<i64, DescriptionError> {
    token
        .parse()
        .map_err(|_| DescriptionError::InvalidInteger {
            line,
            token: token.to_owned(),
        })
}

fn parse_number(line: usize, token: &str) -> Result<f64, DescriptionError> {
    token
        .parse()
        .map_err(|_| DescriptionError::InvalidNumber {
            line,
            token: token.to_owned(),
        })
}
