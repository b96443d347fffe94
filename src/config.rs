//! Command-line configuration for the game binary.

use clap::Parser;

/// Terminal maze game over procedurally generated perfect mazes.
///
/// This structure holds the options parsed from the command line. The defaults give a 31 by 31
/// board; a fixed seed makes the whole session reproducible.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells; even values are rounded up to the next odd value.
    #[arg(long, default_value_t = 31)]
    pub width: usize,

    /// Maze height in cells; even values are rounded up to the next odd value.
    #[arg(long, default_value_t = 31)]
    pub height: usize,

    /// Seed for the maze random stream; omit to draw a fresh one per run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the generated maze to stdout and exit instead of starting the game.
    #[arg(long)]
    pub print: bool,
}
