//! Grid layout for one partition.
//!
//! Nodes are sorted by name with numeric suffixes compared by value, then
//! laid out row-major in the smallest square that holds them all:
//!
//! ```text
//! Partition: batch
//! Total nodes: 5, Grid size: 3x3
//! I I A
//! A X
//!
//! ----------------------------------------
//! ```
//!
//! Each node shows its first recorded state character on that character's
//! background color; cells past the last node are left blank.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::sinfo::{NodeState, NodeStates, UNKNOWN_SYMBOL};
use crate::styling::{StyledLine, cell_style};

/// Width of the line printed after each partition.
pub const SEPARATOR_WIDTH: usize = 40;

/// Blank cell, same width as a filled one.
const BLANK_CELL: &str = "  ";

static NATURAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(\d+)").expect("natural key pattern"));

/// Sort key splitting a node name into alphabetic prefix and numeric suffix.
///
/// `node10` becomes `("node", 10)`. Names that don't start with letters
/// followed by digits sort as `(name, 0)`.
pub fn natural_key(node: &str) -> (&str, u64) {
    NATURAL
        .captures(node)
        .and_then(|caps| {
            let prefix = caps.get(1)?.as_str();
            let number = caps.get(2)?.as_str().parse().ok()?;
            Some((prefix, number))
        })
        .unwrap_or((node, 0))
}

/// Compare node names by [`natural_key`], falling back to the full name so
/// `node01` and `node1` still have a fixed order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// Side of the smallest square grid holding `total` cells.
pub fn grid_side(total: usize) -> usize {
    let side = total.isqrt();
    if side * side < total { side + 1 } else { side }
}

/// One partition's nodes, sorted and sized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionGrid<'a> {
    name: &'a str,
    /// (node name, primary state character), in display order
    cells: Vec<(&'a str, char)>,
    size: usize,
}

impl<'a> PartitionGrid<'a> {
    pub fn new(name: &'a str, nodes: &'a NodeStates) -> Self {
        let mut cells: Vec<(&str, char)> = nodes
            .iter()
            .map(|(node, states)| {
                let primary = states.chars().next().unwrap_or(UNKNOWN_SYMBOL);
                (node.as_str(), primary)
            })
            .collect();
        cells.sort_by(|a, b| natural_cmp(a.0, b.0));

        let size = grid_side(cells.len());
        Self { name, cells, size }
    }

    pub fn total(&self) -> usize {
        self.cells.len()
    }

    /// Side length; the grid has `size * size` cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Character at grid index `i`, or `None` for a blank cell.
    pub fn cell(&self, i: usize) -> Option<char> {
        self.cells.get(i).map(|(_, symbol)| *symbol)
    }

    /// Grid rows only, without header or separator.
    pub fn rows(&self) -> Vec<StyledLine> {
        (0..self.size)
            .map(|row| {
                let mut line = StyledLine::new();
                for i in row * self.size..(row + 1) * self.size {
                    match self.cell(i) {
                        Some(symbol) => {
                            line.push_styled(format!("{symbol} "), cell_style(symbol));
                        }
                        None => line.push_raw(BLANK_CELL),
                    }
                }
                line
            })
            .collect()
    }

    /// Full block: header, summary, rows, separator.
    pub fn lines(&self) -> Vec<StyledLine> {
        let mut lines = Vec::with_capacity(self.size + 3);

        let mut header = StyledLine::new();
        header.push_raw(format!("Partition: {}", self.name));
        lines.push(header);

        let mut summary = StyledLine::new();
        summary.push_raw(format!(
            "Total nodes: {}, Grid size: {}x{}",
            self.total(),
            self.size,
            self.size
        ));
        lines.push(summary);

        lines.extend(self.rows());

        let mut separator = StyledLine::new();
        separator.push_raw("-".repeat(SEPARATOR_WIDTH));
        lines.push(separator);

        lines
    }
}

/// Key to the display characters, one line per state.
pub fn legend_lines() -> Vec<StyledLine> {
    let mut lines = vec![];

    let mut title = StyledLine::new();
    title.push_raw("Legend:");
    lines.push(title);

    for state in NodeState::iter() {
        let symbol = state.symbol();
        let tokens = match state.tokens() {
            [] => "any other state".to_string(),
            tokens => tokens.join(", "),
        };

        let mut line = StyledLine::new();
        line.push_styled(format!("{symbol} "), cell_style(symbol));
        line.push_raw(format!(" {} ({tokens})", state.name()));
        lines.push(line);
    }

    lines
}
