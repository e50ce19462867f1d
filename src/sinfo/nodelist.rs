//! Node-list expansion.
//!
//! Slurm compresses node lists as a prefix followed by a bracketed body of
//! comma-separated numbers and ranges:
//!
//! ```text
//! node[001-003,005]  ->  node001 node002 node003 node005
//! gpu07              ->  gpu07
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::error::SinfoError;

/// `prefix[body]`, where the prefix starts with a letter and the body holds no
/// nested brackets.
static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_.-]*)\[([^\[\]]+)\]$")
        .expect("bracketed node-list pattern")
});

/// Expand a node-list token into individual node names.
///
/// Tokens without a `[` are already a single node name and are returned
/// unchanged. Range members are zero-padded to the digit count of the range's
/// start (`01-10` yields `01`..`10`); single numbers are appended verbatim.
///
/// A reversed range such as `node[5-3]` is rejected rather than yielding nothing.
pub fn expand(token: &str) -> Result<Vec<String>, SinfoError> {
    if !token.contains('[') {
        return Ok(vec![token.to_string()]);
    }

    let caps = BRACKETED
        .captures(token)
        .ok_or_else(|| SinfoError::malformed_node_list(token, shape_problem(token)))?;
    let prefix = &caps[1];
    let body = &caps[2];

    let mut nodes = Vec::new();
    for part in body.split(',') {
        match part.split_once('-') {
            Some((start, end)) => {
                let first = parse_number(token, start)?;
                let last = parse_number(token, end)?;
                if first > last {
                    return Err(SinfoError::malformed_node_list(
                        token,
                        format!("range {part} runs backwards"),
                    ));
                }
                let width = start.len();
                nodes.extend((first..=last).map(|n| format!("{prefix}{n:0width$}")));
            }
            None => {
                check_digits(token, part)?;
                nodes.push(format!("{prefix}{part}"));
            }
        }
    }

    Ok(nodes)
}

/// Explain why a bracketed token didn't match `prefix[body]`.
fn shape_problem(token: &str) -> &'static str {
    if !token.starts_with(|c: char| c.is_ascii_alphabetic()) {
        "no alphabetic prefix"
    } else if token.contains("[]") {
        "empty brackets"
    } else if token.matches('[').count() != token.matches(']').count() {
        "unmatched brackets"
    } else if !token.ends_with(']') {
        "text after the closing bracket"
    } else {
        "expected a single prefix[ranges] group"
    }
}

fn check_digits(token: &str, digits: &str) -> Result<(), SinfoError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SinfoError::malformed_node_list(
            token,
            format!("{digits:?} is not a node number"),
        ));
    }
    Ok(())
}

fn parse_number(token: &str, digits: &str) -> Result<u64, SinfoError> {
    check_digits(token, digits)?;
    digits
        .parse()
        .map_err(|e| SinfoError::malformed_node_list(token, format!("{digits}: {e}")))
}
