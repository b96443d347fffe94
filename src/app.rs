//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    generator::MazeGenerator,
    maze::{CellState, Grid},
    solver,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Requested maze width in cells.
    ///
    /// This field holds the width passed to the generator for the next maze. It starts from the
    /// command-line value and can be changed through the options menu presets.
    pub(crate) width: usize,
    /// Requested maze height in cells.
    ///
    /// This field holds the height passed to the generator for the next maze, managed like the
    /// width.
    pub(crate) height: usize,
    /// Generator behind every maze of the session.
    ///
    /// This field owns the seeded random stream. Restarting draws the next maze from the same
    /// stream, so a fixed seed reproduces the whole sequence of mazes, not just the first one.
    pub(crate) generator: MazeGenerator,
    /// Maze currently being played.
    ///
    /// This field holds the generated grid the in-game screen renders. It is replaced wholesale
    /// on every restart and never mutated in between.
    pub(crate) maze: Grid,
    /// Current player position as (x, y).
    ///
    /// This field tracks the cell the player stands on. It starts on the maze's start marker.
    pub(crate) player: (usize, usize),
    /// Goal position as (x, y).
    ///
    /// This field caches the coordinates of the maze's end marker so the win check after each
    /// move is a plain comparison.
    pub(crate) finish: (usize, usize),
    /// Whether the current maze has been completed.
    ///
    /// This field is set when the player reaches the goal. Movement stops while it is set and the
    /// restart key becomes available.
    pub(crate) won: bool,
    /// Whether the solution overlay is visible.
    ///
    /// This field toggles the rendering of the start-to-end path on top of the maze.
    pub(crate) show_solution: bool,
    /// Start-to-end path of the current maze.
    ///
    /// This field holds the unique solution path computed right after generation, empty in the
    /// degenerate case where the end marker is unreachable.
    pub(crate) solution: Vec<(usize, usize)>,
}

impl App {
    /// Creates the application state from the parsed command-line configuration.
    ///
    /// This function seeds the generator, produces the first maze and derives the player and
    /// goal positions from its markers. The application starts on the main menu.
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::NewMaze),
            width: config.width,
            height: config.height,
            generator: MazeGenerator::new(config.seed),
            maze: Grid::filled(1, 1),
            player: (1, 1),
            finish: (1, 1),
            won: false,
            show_solution: false,
            solution: Vec::new(),
        };
        app.prepare_maze();

        app
    }

    /// Generates a fresh maze and resets the per-round state.
    ///
    /// This function replaces the current grid with the next maze from the session's random
    /// stream, moves the player back to the start marker and recomputes the cached goal position
    /// and solution path. The solvability check is the post-condition the generator itself does
    /// not promise: on degenerate boards the end marker can be walled off, in which case the
    /// solution overlay simply stays empty.
    pub(crate) fn prepare_maze(&mut self) {
        self.maze = self.generator.generate(self.width, self.height);
        self.player = self.maze.find(CellState::Start).unwrap_or((1, 1));
        self.finish = self
            .maze
            .find(CellState::End)
            .unwrap_or((self.maze.width().saturating_sub(2), self.maze.height().saturating_sub(2)));
        self.won = false;
        self.show_solution = false;
        self.solution = solver::solution_path(&self.maze).unwrap_or_default();
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a configuration with a fixed seed for deterministic app state.
    fn test_config() -> Config {
        Config {
            width: 15,
            height: 15,
            seed: Some(7),
            print: false,
        }
    }

    #[test]
    fn test_new_app_starts_on_main_menu() {
        let app = App::new(&test_config());

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::NewMaze));
        assert!(!app.won);
        assert!(!app.show_solution);
    }

    #[test]
    fn test_new_app_places_player_on_start_marker() {
        let app = App::new(&test_config());

        assert_eq!(Some(app.player), app.maze.find(CellState::Start));
        assert_eq!(Some(app.finish), app.maze.find(CellState::End));
    }

    #[test]
    fn test_prepare_maze_resets_round_state() {
        let mut app = App::new(&test_config());
        app.won = true;
        app.show_solution = true;

        app.prepare_maze();

        assert!(!app.won);
        assert!(!app.show_solution);
        assert_eq!(Some(app.player), app.maze.find(CellState::Start));
    }

    #[test]
    fn test_prepare_maze_draws_the_next_maze_from_the_stream() {
        let mut app = App::new(&test_config());
        let first = app.maze.clone();

        app.prepare_maze();

        assert_ne!(first.text_rows(), app.maze.text_rows());
    }

    #[test]
    fn test_solution_connects_player_to_finish() {
        let app = App::new(&test_config());

        assert_eq!(app.solution.first().copied(), Some(app.player));
        assert_eq!(app.solution.last().copied(), Some(app.finish));
    }
}
