//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::OptionsMenu(item) => options_menu(app, frame, *item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both main and options
/// menus. The generic part includes the centered positioning and border styling, while the
/// specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "New Maze", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("New Maze").centered();
    let mut opt2 = Line::raw("Options").centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::NewMaze => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Options => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
    frame.render_widget(opt3, inner_layout[2]);
}

/// Renders the options menu screen with configuration choices.
///
/// This function displays the options menu with the maze size entry, showing the dimensions the
/// next maze will use, and a "Return" entry back to the main menu. It provides the same
/// navigation highlighting as the main menu.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn options_menu(app: &App, frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::OptionsMenu(2));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw(format!("Maze Size: {}x{}", app.width, app.height)).centered();
    let mut opt2 = Line::raw("Return").centered();
    match item {
        OptionsMenuItem::Size => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        OptionsMenuItem::Back => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
}

/// Renders the in-game screen with the maze, the player and the goal.
///
/// This function displays the current maze centered in the terminal, with the player and goal
/// positions drawn on top and the solution overlay when toggled. Each layer uses a [`Canvas`]
/// widget for precise coordinate-based drawing. A banner appears over the maze once the goal has
/// been reached.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze_rows = app.maze.height();
    let maze_columns = app.maze.width();

    // Create overall layout: maze area + tooltip at bottom
    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Center the tooltip horizontally like the maze
    let tooltip_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(tooltip_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    // Create maze layout within the content area
    let main_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);

    let maze_area = main_layout
        .get(1)
        .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(*maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before closures
    let mut wall_cells = Vec::new();
    for (row_idx, row) in app.maze.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if !cell.is_walkable() {
                wall_cells.push((col_idx, row_idx));
            }
        }
    }
    let wall_coords = canvas_coords(&wall_cells, maze_columns, maze_rows)?;
    let solution_coords = if app.show_solution {
        canvas_coords(&app.solution, maze_columns, maze_rows)?
    } else {
        Vec::new()
    };
    let finish_coords = canvas_coords(&[app.finish], maze_columns, maze_rows)?;
    let player_coords = canvas_coords(&[app.player], maze_columns, maze_rows)?;

    let layers = [
        (wall_coords, Color::Green),
        (solution_coords, Color::Blue),
        (finish_coords, Color::Yellow),
        (player_coords, Color::Red),
    ];
    for (coords, color) in &layers {
        let layer = Canvas::default()
            .x_bounds([
                (-rounded_div::i32(space.width.into(), 2)).into(),
                (rounded_div::i32(space.width.into(), 2)).into(),
            ])
            .y_bounds([
                (-rounded_div::i32(space.height.into(), 2)).into(),
                (rounded_div::i32(space.height.into(), 2)).into(),
            ])
            .marker(Marker::Dot)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            });

        frame.render_widget(layer, space);
    }

    if app.won {
        win_banner(frame, maze_content_area)?;
    }

    // Render tooltip as a block at the bottom center with top border
    let tooltip_title = if app.won {
        "(r) new maze / (h) menu / (q) quit"
    } else {
        "(s) solution / (h) menu / (q) quit"
    };
    let tooltip_block = Block::bordered()
        .title(tooltip_title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Renders the win banner over the maze area.
///
/// This function draws a small centered block announcing the completed maze and the restart key,
/// clearing the cells underneath so the maze does not bleed through.
fn win_banner(frame: &mut Frame, area: Rect) -> Result<()> {
    let banner_row = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get banner row from vertical layout")?;
    let banner_area = Layout::horizontal([Constraint::Length(24)])
        .flex(Flex::Center)
        .split(banner_row)
        .first()
        .copied()
        .ok_or_eyre("failed to get banner area from horizontal layout")?;

    frame.render_widget(Clear, banner_area);

    let block = Block::bordered()
        .title("You escaped!")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Rounded);
    let inner = block.inner(banner_area);

    frame.render_widget(block, banner_area);
    frame.render_widget(Line::raw("(r) new maze").centered(), inner);

    Ok(())
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze coordinates (col, row) to screen coordinates (x, y) using the
/// standard transformation formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order)
/// and coordinate[i] = i - (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn canvas_coords(
    cells: &[(usize, usize)],
    columns: usize,
    rows: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(columns)?);

    cells
        .iter()
        .map(|&(col, row)| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
