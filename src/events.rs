//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    maze,
    types::{MainMenuItem, MazeSize, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Char('j') => handle_j_events(app),
                KeyCode::Char('k') => handle_k_events(app),
                KeyCode::Char('l') => handle_l_events(app),
                KeyCode::Char('h') => handle_h_events(app),
                KeyCode::Char('r') => handle_restart(app),
                KeyCode::Char('s') => handle_solution_toggle(app),
                KeyCode::Up => handle_move(app, 0, -1),
                KeyCode::Down => handle_move(app, 0, 1),
                KeyCode::Left => handle_move(app, -1, 0),
                KeyCode::Right => handle_move(app, 1, 0),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus. The
/// selection stops at the last item instead of wrapping.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus, mirroring the
/// 'j' handler.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::NewMaze);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. Selecting
/// "New Maze" generates a maze and enters the game; selecting the size entry cycles through the
/// board presets for the next maze.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::NewMaze) => {
            app.prepare_maze();
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            // Custom command-line dimensions fall back to the first preset.
            let size = MazeSize::from_dims(app.width, app.height)
                .map_or(MazeSize::Small, MazeSize::next);
            let (width, height) = size.dims();
            app.width = width;
            app.height = height;
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::NewMaze);
        }
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to previous screens: to
/// the main menu from the game and from the options menu.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame | Screen::OptionsMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::NewMaze);
        }
        Screen::MainMenu(_) => {}
    }
}

/// Handles 'r' key press events for restarting after a win.
///
/// This function regenerates the maze once the current one has been completed; the restart
/// key does nothing while a round is still in progress.
pub(crate) fn handle_restart(app: &mut App) {
    if matches!(app.screen, Screen::InGame) && app.won {
        app.prepare_maze();
    }
}

/// Handles 's' key press events for the solution overlay.
///
/// This function toggles the rendering of the start-to-end path while in game.
pub(crate) fn handle_solution_toggle(app: &mut App) {
    if matches!(app.screen, Screen::InGame) {
        app.show_solution = !app.show_solution;
    }
}

/// Handles a movement key press in the given direction.
///
/// This function moves the player by one cell when the target is inside the grid and not a
/// wall. Movement is ignored outside the in-game screen and after a win; reaching the goal cell
/// sets the won state.
pub(crate) fn handle_move(app: &mut App, step_x: isize, step_y: isize) {
    if !matches!(app.screen, Screen::InGame) || app.won {
        return;
    }

    let Some((next_x, next_y)) = maze::offset(app.player.0, app.player.1, step_x, step_y) else {
        return;
    };
    if !app.maze.is_walkable(next_x, next_y) {
        return;
    }

    app.player = (next_x, next_y);
    if app.player == app.finish {
        app.won = true;
    }
}
