//! CLI definitions using clap.

use clap::Parser;

/// stepwise - interactive graph traversal walkthrough
#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(version)]
#[command(about = "Step through DFS, BFS and spanning-tree construction over an editable graph")]
#[command(
    long_about = "stepwise drives classic graph traversals one observable step at a time. \
Build an undirected graph, start DFS, BFS or Tree mode, pick a start vertex, \
and press through the run while the narration explains each step."
)]
pub struct Cli {
    /// Load a small demo graph before starting
    #[arg(long, default_value_t = false)]
    pub seed_demo: bool,

    /// Print stats snapshots as JSON instead of console lines
    #[arg(long, default_value_t = false)]
    pub json_stats: bool,
}
