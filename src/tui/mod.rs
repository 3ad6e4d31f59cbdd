//! Terminal front end: draws the board and turns key presses into
//! controller calls.

mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use hotseat_tictactoe::{BoardView, GameController, KeyValueStore, Position};
use ratatui::DefaultTerminal;
use tracing::{debug, info, instrument, warn};

use input::Action;

/// Runs the game until the players quit, restoring the terminal afterwards.
pub fn run<S: KeyValueStore>(controller: &mut GameController<S, BoardView>) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, controller);
    ratatui::restore();
    result
}

#[instrument(skip_all)]
fn event_loop<S: KeyValueStore>(
    terminal: &mut DefaultTerminal,
    controller: &mut GameController<S, BoardView>,
) -> Result<()> {
    let mut cursor = Position::Center;

    loop {
        terminal.draw(|frame| ui::draw(frame, controller.surface(), cursor))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(key.code, cursor) {
            Action::MoveCursor(position) => cursor = position,
            Action::Select(position) => {
                cursor = position;
                if let Some(outcome) = controller.select_cell(position.index()) {
                    debug!(%position, status = ?outcome.status(), "Move applied");
                }
            }
            Action::Reset => {
                controller.reset();
            }
            Action::Save => {
                if let Err(err) = controller.save() {
                    warn!(error = %err, "Explicit save failed");
                }
            }
            Action::Quit => {
                info!("Players quit");
                return Ok(());
            }
            Action::Ignore => {}
        }
    }
}
