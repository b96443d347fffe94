//! Terminal maze game built around a seedable perfect-maze generator.
//!
//! The core of the crate is the [`MazeGenerator`], which carves a perfect maze (exactly one
//! simple path between any two open cells) over an odd-dimensioned grid through randomized
//! depth-first backtracking, and the [`solver`] functions that verify reachability on its
//! output. The remaining modules are the terminal shell: a ratatui interface in which the player
//! walks a generated maze from its start marker to its end marker.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod generator;
mod maze;
pub mod solver;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use generator::MazeGenerator;
pub use maze::{CellState, Grid};
