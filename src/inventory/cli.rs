//! Cloud CLI command execution.
//!
//! Provides utilities for running inventory CLI commands and collecting their output.

use crate::config::MAX_INVENTORY_OUTPUT;
use crate::error::InventoryError;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;
use tokio::process::Command;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> Result<&'static Regex, InventoryError> {
    if let Some(re) = COMMAND_REGEX.get() {
        return Ok(re);
    }
    let re = Regex::new(r#"'([^']*)'\s*|"([^"]*)"\s*|([^'"\s]+)\s*"#)
        .map_err(|e| InventoryError::Other(format!("Invalid Regex: {e}")))?;
    Ok(COMMAND_REGEX.get_or_init(|| re))
}

/// Run `cmd` followed by `args` and return its stdout.
///
/// `cmd` is split on spaces with quoted substrings kept together; `args` are
/// passed through untouched. The child is killed if the returned future is
/// dropped before it exits.
///
/// # Arguments
/// * `cmd` - The command string, program first
/// * `args` - Extra arguments appended as-is
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command cannot start, exits non-zero, or produces too much output
pub async fn run(cmd: &str, args: &[String]) -> Result<String, InventoryError> {
    let mut parts = split_and_strip(cmd)?;
    parts.extend(args.iter().map(String::as_str));
    let command_line = parts.join(" ");
    log::debug!("run({})", command_line.on_blue());

    let (program, rest) = parts.split_first().ok_or(InventoryError::EmptyCommand)?;
    let output = Command::new(program)
        .args(rest)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| {
            log::error!("Command execution failed: {source}");
            InventoryError::Spawn {
                command: command_line.clone(),
                source,
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = command_line.on_blue()
        );
        return Err(InventoryError::CommandFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr,
        });
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > MAX_INVENTORY_OUTPUT {
        return Err(InventoryError::OutputTooLarge(output.stdout.len()));
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Split a command string on spaces, preserving quoted substrings.
///
/// # Arguments
/// * `input` - The command string to split
///
/// # Returns
/// * `Ok(Vec<&str>)` - The words, quotes stripped; `''` yields an empty word
/// * `Err` - If the splitting regex cannot be built
pub fn split_and_strip(input: &str) -> Result<Vec<&str>, InventoryError> {
    let re = get_command_regex()?;
    Ok(re
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect())
}
