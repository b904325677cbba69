//! Terminal UI: renders the game view and forwards input to the engine.

mod app;
mod input;
mod ui;

pub use app::{App, Focus, UiCommand};
pub use input::key_to_command;
pub use ui::{cell_at, draw};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.ascending());
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.engine().history().len() - 1,
        status = %app.engine().status(),
        "TUI exited"
    );
    res
}

/// Draw, block for one event, apply it. Repeats until quit.
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        let command = match event::read()? {
            Event::Key(key) => key_to_command(app.focus(), key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                cell_at(Rect::new(0, 0, size.width, size.height), column, row)
                    .map(UiCommand::Place)
            }
            _ => None,
        };

        if let Some(command) = command {
            debug!(?command, "Input decoded");
            app.handle(command);
        }
    }
    Ok(())
}
