//! Terminal host and entry point.
//!
//! This module provides the thin integration layer between the Bookcase
//! library and the terminal: raw-mode/alternate-screen lifecycle, the
//! blocking event loop, key-to-event mapping, and action execution.
//!
//! # Event Loop
//!
//! Events are read one at a time and each handler runs to completion before
//! the next event is processed; there are no background tasks and no
//! suspension points. Resize events re-render at the new dimensions.
//!
//! # Event Mapping
//!
//! Terminal keys are translated to library events based on which overlay is
//! open, so the same key can edit the search form in one mode and navigate
//! cards in another.
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move card selection
//! - `Enter`: Open the detail overlay for the selected card
//! - `m`/`PageDown`: Show more results
//! - `/`: Open the search overlay
//! - `s`: Open the settings overlay
//! - `q`: Quit
//!
//! In the search overlay:
//! - `Tab`: Next field
//! - Typing/`Backspace`: Edit the title field
//! - `h`/`l`/`Left`/`Right`: Cycle the focused select
//! - `Enter`: Apply filters
//! - `Esc`: Cancel
//!
//! In the settings overlay:
//! - `j`/`k`: Choose day/night
//! - `Enter`: Apply
//! - `Esc`: Cancel
//!
//! In the detail overlay:
//! - `Esc`/`Enter`/`q`: Close
//!
//! `Ctrl+c` quits from any mode.

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};

use bookcase::app::modes::SearchField;
use bookcase::{handle_event, initialize, Action, AppState, Config, Event, Overlay, Result};

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bookcase: {e}");
            eprintln!("usage: bookcase [catalog=PATH] [theme=day|night] [theme_file=PATH] [log_level=LEVEL]");
            std::process::exit(2);
        }
    };

    bookcase::observability::init_tracing(&config);

    let state = match initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("bookcase: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(state) {
        eprintln!("bookcase: {e}");
        std::process::exit(1);
    }
}

/// Acquires the terminal, runs the event loop, and restores the terminal.
///
/// Restoration runs even when the loop returns an error, so a failure never
/// leaves the user's shell in raw mode.
fn run(mut state: AppState) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut state, &mut stdout);

    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Blocking event loop: read a key, handle it, re-render when asked.
fn event_loop(state: &mut AppState, stdout: &mut io::Stdout) -> Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    draw(state, rows, cols, stdout)?;

    loop {
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(app_event) = map_key_event(state, &key) else {
                    continue;
                };

                let (should_render, actions) = handle_event(state, &app_event)?;

                for action in actions {
                    match action {
                        Action::Quit => {
                            tracing::debug!("quit requested");
                            return Ok(());
                        }
                    }
                }

                if should_render {
                    draw(state, rows, cols, stdout)?;
                }
            }
            TermEvent::Resize(new_cols, new_rows) => {
                tracing::debug!(cols = new_cols, rows = new_rows, "terminal resized");
                cols = new_cols;
                rows = new_rows;
                draw(state, rows, cols, stdout)?;
            }
            _ => {}
        }
    }
}

/// Clears the screen, renders the current state, and flushes.
fn draw(state: &AppState, rows: u16, cols: u16, stdout: &mut io::Stdout) -> Result<()> {
    execute!(stdout, Clear(ClearType::All))?;
    bookcase::ui::render(state, rows as usize, cols as usize);
    stdout.flush()?;
    Ok(())
}

/// Maps a key press to a library event based on the open overlay.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    match state.overlay {
        Overlay::Browse => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Event::CardDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::CardUp),
            KeyCode::Enter => Some(Event::SelectCard),
            KeyCode::PageDown | KeyCode::Char('m') => Some(Event::LoadMore),
            KeyCode::Char('/') => Some(Event::OpenSearch),
            KeyCode::Char('s') => Some(Event::OpenSettings),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
        Overlay::Search => match key.code {
            KeyCode::Esc => Some(Event::CancelSearch),
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Tab => Some(Event::NextField),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Left => Some(Event::CycleBack),
            KeyCode::Right => Some(Event::CycleForward),
            KeyCode::Char(c) => {
                if state.search_draft.focus == SearchField::Title {
                    Some(Event::Char(c))
                } else {
                    match c {
                        'h' | 'k' => Some(Event::CycleBack),
                        'l' | 'j' => Some(Event::CycleForward),
                        _ => None,
                    }
                }
            }
            _ => None,
        },
        Overlay::Settings => match key.code {
            KeyCode::Esc => Some(Event::CancelSettings),
            KeyCode::Enter => Some(Event::SubmitSettings),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Event::CycleTheme)
            }
            KeyCode::Char('j' | 'k' | 'h' | 'l') => Some(Event::CycleTheme),
            _ => None,
        },
        Overlay::Detail => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Event::CloseDetail),
            _ => None,
        },
    }
}
