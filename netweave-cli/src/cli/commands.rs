//! Command implementations and argument parsing for the netweave CLI.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use netweave_core::{
    AnalyzerBuilder, Cable, Connectivity, DisconnectingPair, Edge, MaxFlow, NetworkAnalyzer,
    NetworkError, Orientation, Route, SpanningForest,
};
use netweave_providers_text::{DescriptionError, NetworkDescription};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::{menu::run_menu, render::render_report};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "netweave", about = "Analyse latency, capacity and resilience of a network.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the lowest-latency path between two vertices.
    Path(RouteArgs),
    /// Report whether links of a single cable type connect the network.
    Cable(CableArgs),
    /// Print the maximum throughput between two vertices.
    Throughput(RouteArgs),
    /// Print the lowest-latency spanning tree or forest.
    Spanning(NetworkArgs),
    /// List vertex pairs whose joint failure disconnects the network.
    Failures(FailuresArgs),
    /// Answer queries interactively from a numbered menu.
    Menu(MenuArgs),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Cable(_) => "cable",
            Self::Throughput(_) => "throughput",
            Self::Spanning(_) => "spanning",
            Self::Failures(_) => "failures",
            Self::Menu(_) => "menu",
        }
    }
}

/// Arguments locating and interpreting a network description.
#[derive(Debug, Args, Clone)]
pub struct NetworkArgs {
    /// Path to the network description file.
    pub path: PathBuf,

    /// Treat every link as traversable in both directions.
    #[arg(long)]
    pub undirected: bool,
}

/// Arguments for queries between two vertices.
#[derive(Debug, Args, Clone)]
pub struct RouteArgs {
    /// Network to analyse.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Source vertex.
    #[arg(long)]
    pub from: usize,

    /// Destination vertex.
    #[arg(long)]
    pub to: usize,
}

/// Arguments for the `cable` command.
#[derive(Debug, Args, Clone)]
pub struct CableArgs {
    /// Network to analyse.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Cable type whose links are kept.
    #[arg(long, default_value = "copper")]
    pub cable: String,

    /// Connectivity semantics.
    #[arg(long, value_enum, default_value_t = ConnectivityArg::Weak)]
    pub connectivity: ConnectivityArg,
}

/// Arguments for the `failures` command.
#[derive(Debug, Args, Clone)]
pub struct FailuresArgs {
    /// Network to analyse.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Connectivity semantics.
    #[arg(long, value_enum, default_value_t = ConnectivityArg::Weak)]
    pub connectivity: ConnectivityArg,
}

/// Arguments for the `menu` command.
#[derive(Debug, Args, Clone)]
pub struct MenuArgs {
    /// Network to analyse.
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Connectivity semantics used by the cable and failure queries.
    #[arg(long, value_enum, default_value_t = ConnectivityArg::Weak)]
    pub connectivity: ConnectivityArg,
}

/// Connectivity semantics accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectivityArg {
    /// Ignore link direction.
    Weak,
    /// Require mutual reachability.
    Strong,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(value: ConnectivityArg) -> Self {
        match value {
            ConnectivityArg::Weak => Self::Weak,
            ConnectivityArg::Strong => Self::Strong,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The network description could not be loaded.
    #[error(transparent)]
    Description(#[from] DescriptionError),
    /// A query was rejected by the analyzer.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// Reading input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Description(err) => Some(err.code().as_str()),
            Self::Network(err) => Some(err.code().as_str()),
            Self::Terminal(_) => None,
        }
    }
}

/// One of the five network questions.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Lowest-latency path between two vertices.
    LowestLatencyPath {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },
    /// Connectivity restricted to one cable type.
    CableOnly(Cable),
    /// Maximum throughput between two vertices.
    MaxThroughput {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
    },
    /// Lowest-latency spanning structure.
    SpanningStructure,
    /// Vertex pairs whose failure disconnects the network.
    DisconnectingPairs,
}

/// The answer to a [`Query`], ready for rendering.
#[derive(Debug, Clone)]
pub enum Report {
    /// Result of [`Query::LowestLatencyPath`].
    Route {
        /// Source vertex.
        from: usize,
        /// Destination vertex.
        to: usize,
        /// The route, or `None` when the destination is unreachable.
        route: Option<Route>,
    },
    /// Result of [`Query::CableOnly`].
    Cable {
        /// Cable type examined.
        cable: Cable,
        /// Semantics used for the check.
        connectivity: Connectivity,
        /// Whether the cable links connect every vertex.
        connected: bool,
    },
    /// Result of [`Query::MaxThroughput`].
    Throughput {
        /// Flow assignment and value.
        flow: MaxFlow,
        /// Links crossing the minimum cut.
        cut: Vec<Edge>,
    },
    /// Result of [`Query::SpanningStructure`].
    Spanning(SpanningForest),
    /// Result of [`Query::DisconnectingPairs`].
    Failures {
        /// Semantics used for the sweep.
        connectivity: Connectivity,
        /// Pairs found, sorted by vertex.
        pairs: Vec<DisconnectingPair>,
    },
}

/// Answers `query` against `analyzer`.
///
/// # Errors
/// Returns [`NetworkError`] when a vertex is out of range or a sweep is
/// cancelled.
pub fn answer(analyzer: &NetworkAnalyzer, query: &Query) -> Result<Report, NetworkError> {
    let report = match query {
        Query::LowestLatencyPath { from, to } => Report::Route {
            from: *from,
            to: *to,
            route: analyzer.lowest_latency_path(*from, *to)?,
        },
        Query::CableOnly(cable) => Report::Cable {
            cable: cable.clone(),
            connectivity: analyzer.connectivity(),
            connected: analyzer.cable_only_connected(cable),
        },
        Query::MaxThroughput { from, to } => {
            let flow = analyzer.max_flow(*from, *to)?;
            let cut = flow
                .min_cut()
                .iter()
                .filter_map(|id| analyzer.graph().edge(*id).cloned())
                .collect();
            Report::Throughput { flow, cut }
        }
        Query::SpanningStructure => Report::Spanning(analyzer.lowest_latency_spanning_structure()),
        Query::DisconnectingPairs => Report::Failures {
            connectivity: analyzer.connectivity(),
            pairs: analyzer.find_disconnecting_pairs()?,
        },
    };
    Ok(report)
}

/// Executes the CLI command represented by `cli`, reading menu input from
/// `input` and writing every rendered result to `output`.
///
/// # Errors
/// Returns [`CliError`] when loading, querying or terminal I/O fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netweave_cli::cli::{Cli, Command, NetworkArgs, RouteArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 copper 10 5\n1 2 copper 5 10\n")?;
/// let cli = Cli {
///     command: Command::Throughput(RouteArgs {
///         network: NetworkArgs { path: file.path().to_path_buf(), undirected: false },
///         from: 0,
///         to: 2,
///     }),
/// };
/// let mut output = Vec::new();
/// run_cli(cli, std::io::empty(), &mut output)?;
/// assert!(String::from_utf8(output)?.contains("is 5"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, input, output),
    fields(command = field::Empty),
)]
pub fn run_cli<R: BufRead, W: Write>(cli: Cli, input: R, mut output: W) -> Result<(), CliError> {
    Span::current().record("command", field::display(cli.command.name()));
    let (network, connectivity, query) = match cli.command {
        Command::Path(args) => (
            args.network,
            ConnectivityArg::Weak,
            Query::LowestLatencyPath {
                from: args.from,
                to: args.to,
            },
        ),
        Command::Cable(args) => (
            args.network,
            args.connectivity,
            Query::CableOnly(Cable::from(args.cable)),
        ),
        Command::Throughput(args) => (
            args.network,
            ConnectivityArg::Weak,
            Query::MaxThroughput {
                from: args.from,
                to: args.to,
            },
        ),
        Command::Spanning(network) => (network, ConnectivityArg::Weak, Query::SpanningStructure),
        Command::Failures(args) => (args.network, args.connectivity, Query::DisconnectingPairs),
        Command::Menu(args) => {
            let analyzer = load_analyzer(&args.network, args.connectivity)?;
            return run_menu(&analyzer, input, output);
        }
    };

    let analyzer = load_analyzer(&network, connectivity)?;
    let report = answer(&analyzer, &query)?;
    render_report(&report, &mut output)?;
    output.flush()?;
    info!("command completed");
    Ok(())
}

#[instrument(
    name = "cli.load",
    err,
    skip(network, connectivity),
    fields(path = %network.path.display(), undirected = network.undirected, connectivity = %Connectivity::from(connectivity)),
)]
pub(super) fn load_analyzer(
    network: &NetworkArgs,
    connectivity: ConnectivityArg,
) -> Result<NetworkAnalyzer, CliError> {
    let orientation = if network.undirected {
        Orientation::Undirected
    } else {
        Orientation::Directed
    };
    let description =
        NetworkDescription::try_from_path_with_orientation(&network.path, orientation)?;
    info!(
        network = description.name(),
        vertices = description.graph().vertex_count(),
        edges = description.graph().edge_count(),
        "network loaded"
    );
    Ok(AnalyzerBuilder::new(description.into_graph())
        .with_connectivity(connectivity.into())
        .build())
}
