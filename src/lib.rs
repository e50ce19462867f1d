pub mod config;
pub mod grid;
pub mod shell_exec;
pub mod sinfo;
pub mod styling;

pub use grid::PartitionGrid;
pub use sinfo::{PartitionStateMap, SinfoError};
