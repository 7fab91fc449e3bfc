//! Small helpers shared across CLI tests.
//!
//! Tests write network descriptions into temporary directories and run
//! commands against in-memory input and output buffers.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, NetworkArgs, run_cli};

pub(super) const WORKED_EXAMPLE: &str =
    "4\n0 1 copper 10 5\n1 2 copper 5 10\n2 3 fiber 8 4\n3 0 copper 6 3\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_network_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn network(path: PathBuf) -> NetworkArgs {
    NetworkArgs {
        path,
        undirected: false,
    }
}

/// Runs `cli` with `input` as stdin and returns everything written to stdout.
pub(super) fn run_to_string(cli: Cli, input: &str) -> Result<String, CliError> {
    let mut output = Vec::new();
    run_cli(cli, Cursor::new(input.to_owned()), &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_to_string(cli, "") {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
