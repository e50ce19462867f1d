use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nodegrid::config::{GridConfig, config_path};
use nodegrid::grid::legend_lines;
use nodegrid::styling::{ERROR, ERROR_EMOJI, eprintln, println};
use nodegrid::{PartitionGrid, PartitionStateMap, SinfoError, sinfo};

#[derive(Parser, Debug)]
#[command(name = "nodegrid")]
#[command(version, about = "Show Slurm partition node states as color grids", long_about = None)]
struct Cli {
    /// Read a saved `sinfo -h` snapshot instead of running the command (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Only show this partition (may be repeated)
    #[arg(short = 'p', long = "partition", value_name = "NAME")]
    partitions: Vec<String>,

    /// Print a key to the state characters after the grids
    #[arg(long)]
    legend: bool,

    /// Config file (defaults to ~/.config/nodegrid/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log commands and skipped rows to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<SinfoError>() {
            // Already styled
            Some(err) => eprintln!("{err}"),
            None => eprintln!("{ERROR_EMOJI} {ERROR}{e:#}{ERROR:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = match &cli.input {
        Some(path) => sinfo::read_snapshot(path)?,
        None => {
            let path = config_path(cli.config.clone());
            let config = GridConfig::load(path.as_deref()).context("Failed to load config")?;
            sinfo::query(&config)?
        }
    };

    let partitions = sinfo::parse_lines(&output);
    print_partitions(&partitions, &cli.partitions);

    if cli.legend {
        for line in legend_lines() {
            println!("{}", line.render());
        }
    }

    Ok(())
}

fn print_partitions(partitions: &PartitionStateMap, filters: &[String]) {
    for filter in filters {
        if !partitions.keys().any(|name| matches_filter(name, filter)) {
            log::warn!("Partition {filter} not found in status output");
        }
    }

    let selected = partitions
        .iter()
        .filter(|(name, _)| filters.is_empty() || filters.iter().any(|f| matches_filter(name, f)));

    for (name, nodes) in selected {
        for line in PartitionGrid::new(name, nodes).lines() {
            println!("{}", line.render());
        }
    }
}

/// `sinfo` marks the default partition with a trailing `*`; filters match with or without it.
fn matches_filter(name: &str, filter: &str) -> bool {
    name == filter || name.strip_suffix('*') == Some(filter)
}
