//! Interactive numbered menu over one loaded network.
//!
//! Each selection runs exactly one query and returns to the menu. Invalid
//! selections and malformed vertices are reported and re-prompted without
//! touching any state; only `0` or end of input leaves the loop.

use std::io::{BufRead, Write};

use netweave_core::{Cable, NetworkAnalyzer};
use tracing::{debug, info, instrument, warn};

use super::commands::{CliError, Query, answer};
use super::render::render_report;

const MENU: &str = "\
1. Lowest latency path between two points
2. Is the network connected by copper cables only?
3. Maximum throughput between two points
4. Lowest latency spanning tree
5. Vertex pairs whose failure disconnects the network
0. Quit";

/// A parsed menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: lowest-latency path.
    LowestLatencyPath,
    /// `2`: copper-only connectivity.
    CopperOnly,
    /// `3`: maximum throughput.
    MaxThroughput,
    /// `4`: spanning structure.
    SpanningStructure,
    /// `5`: disconnecting pairs.
    DisconnectingPairs,
    /// `0`: leave the menu.
    Quit,
}

impl MenuChoice {
    /// Parses a selection line, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::LowestLatencyPath),
            "2" => Some(Self::CopperOnly),
            "3" => Some(Self::MaxThroughput),
            "4" => Some(Self::SpanningStructure),
            "5" => Some(Self::DisconnectingPairs),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}

enum Prompted<T> {
    Value(T),
    Invalid,
    Closed,
}

/// Runs the menu loop until the user quits or input ends.
///
/// Query failures such as out-of-range vertices are printed and the menu is
/// shown again.
///
/// # Errors
/// Returns [`CliError::Terminal`] when reading or writing fails.
#[instrument(name = "cli.menu", err, skip_all)]
pub fn run_menu<R: BufRead, W: Write>(
    analyzer: &NetworkAnalyzer,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    writeln!(output, "Welcome to the network analyzer!")?;
    writeln!(output, "Please select what you would like to do")?;
    loop {
        writeln!(output)?;
        writeln!(output, "{MENU}")?;
        let choice = match prompt(&mut input, &mut output, "Selection: ")? {
            Some(line) => MenuChoice::parse(&line),
            None => break,
        };
        let Some(choice) = choice else {
            warn!("invalid menu selection");
            writeln!(output, "Please enter a number between 0 and 5")?;
            continue;
        };
        debug!(?choice, "menu selection");
        let query = match choice {
            MenuChoice::Quit => break,
            MenuChoice::CopperOnly => Query::CableOnly(Cable::copper()),
            MenuChoice::SpanningStructure => Query::SpanningStructure,
            MenuChoice::DisconnectingPairs => Query::DisconnectingPairs,
            MenuChoice::LowestLatencyPath | MenuChoice::MaxThroughput => {
                writeln!(output, "Which vertices would you like to check?")?;
                let (from, to) = match prompt_pair(&mut input, &mut output)? {
                    Prompted::Value(pair) => pair,
                    Prompted::Invalid => continue,
                    Prompted::Closed => break,
                };
                if choice == MenuChoice::LowestLatencyPath {
                    Query::LowestLatencyPath { from, to }
                } else {
                    Query::MaxThroughput { from, to }
                }
            }
        };
        match answer(analyzer, &query) {
            Ok(report) => render_report(&report, &mut output)?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
    output.flush()?;
    info!("menu closed");
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, CliError> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt_vertex<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Prompted<usize>, CliError> {
    let Some(line) = prompt(input, output, label)? else {
        return Ok(Prompted::Closed);
    };
    if let Ok(vertex) = line.trim().parse() {
        return Ok(Prompted::Value(vertex));
    }
    writeln!(output, "`{}` is not a vertex number", line.trim())?;
    Ok(Prompted::Invalid)
}

fn prompt_pair<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Prompted<(usize, usize)>, CliError> {
    let from = match prompt_vertex(input, output, "Vertex 1: ")? {
        Prompted::Value(vertex) => vertex,
        Prompted::Invalid => return Ok(Prompted::Invalid),
        Prompted::Closed => return Ok(Prompted::Closed),
    };
    let to = match prompt_vertex(input, output, "Vertex 2: ")? {
        Prompted::Value(vertex) => vertex,
        Prompted::Invalid => return Ok(Prompted::Invalid),
        Prompted::Closed => return Ok(Prompted::Closed),
    };
    Ok(Prompted::Value((from, to)))
}
