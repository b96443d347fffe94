//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    ///
    /// This variant represents the options menu screen of the game, where the maze size can be
    /// changed.
    OptionsMenu(OptionsMenuItem),
    /// In-game screen.
    ///
    /// This variant represents the ingame screen where the generated maze is displayed and the
    /// player walks it from start to end.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which
/// items can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "New Maze" menu option.
    ///
    /// This variant represents the "New Maze" option in the main menu, which generates a maze and
    /// starts the game.
    NewMaze,
    /// "Options" menu option.
    ///
    /// This variant represents the "Options" option in the main menu.
    Options,
    /// "Quit" menu option.
    ///
    /// This variant represents the "Quit" option in the main menu.
    Quit,
}

/// Options menu navigation choices.
///
/// This enumeration holds the different items in the options menu. It is used to determine which
/// items can the user select in the options menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// Maze size option.
    ///
    /// This variant represents the maze size entry in the options menu. Selecting it cycles
    /// through the size presets.
    Size,
    /// "Return" navigation option.
    ///
    /// This variant represents the "Return" option in the options menu.
    Back,
}

/// Maze size presets selectable from the options menu.
///
/// This enumeration holds the board dimensions offered by the options menu. The medium preset
/// matches the default 31 by 31 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MazeSize {
    /// 21 by 21 board.
    Small,
    /// 31 by 31 board.
    Medium,
    /// 41 by 41 board.
    Large,
}

impl MazeSize {
    /// Returns the board dimensions of the preset.
    pub(crate) const fn dims(self) -> (usize, usize) {
        match self {
            Self::Small => (21, 21),
            Self::Medium => (31, 31),
            Self::Large => (41, 41),
        }
    }

    /// Returns the preset matching the given dimensions, if any.
    ///
    /// This function lets the options menu recognize the current board when it was set from a
    /// preset; custom dimensions passed on the command line match no preset.
    pub(crate) fn from_dims(width: usize, height: usize) -> Option<Self> {
        [Self::Small, Self::Medium, Self::Large]
            .into_iter()
            .find(|size| size.dims() == (width, height))
    }

    /// Returns the preset following this one, wrapping around after the largest.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large => Self::Small,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    ///
    /// This variant represents the main menu in the game.
    MainMenu(u8),
    /// Options menu configuration.
    ///
    /// This variant represents the options menu in the game.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations,
    /// allowing the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) => *value,
            Self::OptionsMenu(value) => *value,
        }
    }
}
