//! This crate contains the source code for the binary for the game mazebound.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazebound::{App, Config, MazeGenerator};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();

    if config.print {
        let mut generator = MazeGenerator::new(config.seed);
        let grid = generator.generate(config.width, config.height);
        for row in grid.text_rows() {
            println!("{row}");
        }

        return Ok(());
    }

    let mut terminal = ratatui::init();
    App::new(&config).run(&mut terminal)?;
    ratatui::restore();

    Ok(())
}
