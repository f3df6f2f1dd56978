use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::constants::DEFAULT_FRAME_MS;
use crate::game::EdgePolicy;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about)]
pub struct Args {
    /// Seed for piece selection. A fresh random seed is used if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between gravity ticks. One tick per animation frame is ~16.
    #[arg(long, default_value_t = DEFAULT_FRAME_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub frame_ms: u64,

    /// Whether the walls and floor stop the piece.
    #[arg(long, value_enum, default_value_t = Edges::Walled)]
    pub edges: Edges,

    /// Write tracing output here. Nothing is logged if unset.
    #[arg(long, env = "BLOCKFALL_LOG")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Edges {
    /// Walls and floor block movement.
    Walled,
    /// Only locked cells block movement.
    Open,
}

impl From<Edges> for EdgePolicy {
    fn from(edges: Edges) -> Self {
        match edges {
            Edges::Walled => EdgePolicy::Walled,
            Edges::Open => EdgePolicy::Open,
        }
    }
}

/// Settings for one run of the terminal game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub frame_interval: Duration,
    pub edges: EdgePolicy,
    pub log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            frame_interval: Duration::from_millis(args.frame_ms),
            edges: args.edges.into(),
            log_file: args.log_file,
        }
    }
}
