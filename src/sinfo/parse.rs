//! Parse `sinfo -h` rows into per-partition node states.
//!
//! Each row has at least six whitespace-separated columns:
//!
//! ```text
//! PARTITION AVAIL TIMELIMIT NODES STATE NODELIST
//! batch*    up    infinite  3     idle  node[001-003]
//! ```
//!
//! Only partition, state, and node list are used. Rows with fewer columns
//! (blank lines, stray headers) are skipped, as are rows whose node list
//! doesn't expand.

use indexmap::IndexMap;

use super::nodelist;
use super::state;

/// Number of columns a data row must have.
pub const MIN_FIELDS: usize = 6;

/// Node name -> display characters, one per row the node appeared in.
pub type NodeStates = IndexMap<String, String>;

/// Partition name -> its nodes, in the order partitions first appeared.
pub type PartitionStateMap = IndexMap<String, NodeStates>;

/// The columns of one `sinfo` row that the grid needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow<'a> {
    pub partition: &'a str,
    pub state: &'a str,
    pub nodelist: &'a str,
}

impl<'a> StatusRow<'a> {
    /// Split a line into a row, or `None` if it has fewer than six columns.
    pub fn parse(line: &'a str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some(StatusRow {
            partition: fields[0],
            state: fields[4],
            nodelist: fields[5],
        })
    }
}

/// Record one row into the map.
///
/// Every node in the row's node list gets the row's display character appended.
/// A malformed node list leaves the map untouched.
fn record(mut partitions: PartitionStateMap, row: StatusRow<'_>) -> PartitionStateMap {
    let nodes = match nodelist::expand(row.nodelist) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Skipping row for partition {}: {}", row.partition, e);
            return partitions;
        }
    };

    let symbol = state::normalize(row.state);
    let node_states = partitions.entry(row.partition.to_string()).or_default();
    for node in nodes {
        node_states.entry(node).or_default().push(symbol);
    }
    partitions
}

/// Build the partition map from raw `sinfo` output.
pub fn parse_lines(input: &str) -> PartitionStateMap {
    input
        .lines()
        .filter_map(|line| {
            let row = StatusRow::parse(line);
            if row.is_none() && !line.trim().is_empty() {
                log::debug!("Skipping short row: {:?}", line);
            }
            row
        })
        .fold(PartitionStateMap::new(), record)
}
