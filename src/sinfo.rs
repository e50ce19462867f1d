//! Reading and parsing Slurm partition status.
//!
//! The status command (`sinfo -h` by default) runs to completion before any
//! parsing starts. Its output, or a saved snapshot of it, is turned into a
//! [`PartitionStateMap`] by [`parse_lines`].

pub mod error;
pub mod nodelist;
pub mod parse;
pub mod state;

use std::io::Read;
use std::path::Path;

pub use error::SinfoError;
pub use parse::{NodeStates, PartitionStateMap, StatusRow, parse_lines};
pub use state::{NodeState, UNKNOWN_SYMBOL, normalize};

use crate::config::GridConfig;
use crate::shell_exec::Cmd;

/// Run the configured status command and return its stdout.
///
/// Fails with [`SinfoError::SourceUnavailable`] if the command can't be
/// spawned, times out, exits non-zero, or prints nothing.
pub fn query(config: &GridConfig) -> Result<String, SinfoError> {
    let cmd = Cmd::new(&config.command)
        .args(&config.args)
        .context("status")
        .timeout(config.timeout());
    let cmd_str = cmd.display();

    let output = cmd
        .run()
        .map_err(|e| SinfoError::source_unavailable(&cmd_str, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            detail => format!("{}: {}", output.status, detail),
        };
        return Err(SinfoError::source_unavailable(cmd_str, reason));
    }

    non_empty(&cmd_str, String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Read a saved status snapshot. `-` reads standard input.
pub fn read_snapshot(path: &Path) -> Result<String, SinfoError> {
    let origin = path.display().to_string();
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| SinfoError::source_unavailable("stdin", e.to_string()))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| SinfoError::source_unavailable(&origin, e.to_string()))?
    };

    non_empty(&origin, contents)
}

fn non_empty(origin: &str, output: String) -> Result<String, SinfoError> {
    if output.trim().is_empty() {
        return Err(SinfoError::source_unavailable(origin, "no output"));
    }
    Ok(output)
}
