//! Command-line interface orchestration for netweave.
//!
//! One subcommand per network question loads a description file, answers the
//! question and renders the result; `menu` runs the same queries from an
//! interactive loop.

mod commands;
mod menu;
mod render;

pub use commands::{
    CableArgs, Cli, CliError, Command, ConnectivityArg, FailuresArgs, MenuArgs, NetworkArgs,
    Query, Report, RouteArgs, answer, run_cli,
};
pub use menu::{MenuChoice, run_menu};
pub use render::{
    render_cable_connectivity, render_disconnecting_pairs, render_max_flow, render_report,
    render_route, render_spanning_forest,
};

#[cfg(test)]
mod test_helpers;
