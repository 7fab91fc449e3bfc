//! Plain-text rendering of query results.
//!
//! Every function writes into any [`Write`] so the one-shot commands, the
//! interactive menu and the tests share one formatting path.

use std::io::{self, Write};

use netweave_core::{Cable, Connectivity, DisconnectingPair, Edge, MaxFlow, Route, SpanningForest};

use super::commands::Report;

/// Renders any [`Report`].
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_report(report: &Report, writer: &mut impl Write) -> io::Result<()> {
    match report {
        Report::Route { from, to, route } => render_route(*from, *to, route.as_ref(), writer),
        Report::Cable {
            cable,
            connectivity,
            connected,
        } => render_cable_connectivity(cable, *connectivity, *connected, writer),
        Report::Throughput { flow, cut } => render_max_flow(flow, cut, writer),
        Report::Spanning(forest) => render_spanning_forest(forest, writer),
        Report::Failures {
            connectivity,
            pairs,
        } => render_disconnecting_pairs(pairs, *connectivity, writer),
    }
}

/// Renders a lowest-latency route, or its absence.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use netweave_cli::cli::render_route;
/// let mut buffer = Vec::new();
/// render_route(0, 3, None, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8_lossy(&buffer),
///     "No path exists from vertex 0 to vertex 3\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_route(
    from: usize,
    to: usize,
    route: Option<&Route>,
    writer: &mut impl Write,
) -> io::Result<()> {
    let Some(route) = route else {
        return writeln!(writer, "No path exists from vertex {from} to vertex {to}");
    };
    writeln!(writer, "Lowest latency path from vertex {from} to vertex {to}:")?;
    write_edges(route.edges(), writer)?;
    writeln!(writer, "Total latency: {}", route.total_time())?;
    match route.bottleneck_bandwidth() {
        Some(bandwidth) => writeln!(writer, "Minimum bandwidth along this path: {bandwidth}"),
        None => writeln!(writer, "Source and destination are the same vertex"),
    }
}

/// Renders the answer to a single-cable connectivity check.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_cable_connectivity(
    cable: &Cable,
    connectivity: Connectivity,
    connected: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    let verdict = if connected { "is" } else { "is NOT" };
    writeln!(
        writer,
        "This network {verdict} {cable}-only connected ({connectivity} connectivity)"
    )
}

/// Renders a maximum-flow result with its minimum cut.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_max_flow(flow: &MaxFlow, cut: &[Edge], writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "The maximum throughput from vertex {} to vertex {} is {}",
        flow.source(),
        flow.sink(),
        flow.value()
    )?;
    if cut.is_empty() {
        return Ok(());
    }
    writeln!(writer, "Saturated links on a minimum cut:")?;
    write_edges(cut, writer)
}

/// Renders a spanning tree, or a forest when the network is disconnected.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_spanning_forest(forest: &SpanningForest, writer: &mut impl Write) -> io::Result<()> {
    if forest.is_tree() {
        writeln!(writer, "The lowest latency spanning tree contains the following edges:")?;
    } else {
        writeln!(
            writer,
            "The network is not connected; the lowest latency spanning forest of {} trees contains the following edges:",
            forest.tree_count()
        )?;
    }
    write_edges(forest.edges(), writer)?;
    writeln!(writer, "Total latency: {}", forest.total_time())
}

/// Renders the vertex pairs whose joint failure disconnects the network.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_disconnecting_pairs(
    pairs: &[DisconnectingPair],
    connectivity: Connectivity,
    writer: &mut impl Write,
) -> io::Result<()> {
    if pairs.is_empty() {
        return writeln!(
            writer,
            "No two vertex failures disconnect the network ({connectivity} connectivity)"
        );
    }
    for pair in pairs {
        if pair.components == 0 {
            writeln!(
                writer,
                "Removing vertices {} and {} leaves no vertices",
                pair.first, pair.second
            )?;
        } else {
            writeln!(
                writer,
                "Removing vertices {} and {} splits the network into {} components",
                pair.first, pair.second, pair.components
            )?;
        }
    }
    Ok(())
}

fn write_edges(edges: &[Edge], writer: &mut impl Write) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "  {edge}")?;
    }
    Ok(())
}
