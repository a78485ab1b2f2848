use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::actions::generate_script;
use super::state::App;
use crate::ui::draw::ui;

pub fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if app.search_mode {
        match key.code {
            KeyCode::Esc => {
                app.search_mode = false;
            }
            KeyCode::Enter => {
                app.search_mode = false;
                app.set_status(format!("Search applied: '{}'", app.search_input));
            }
            KeyCode::Backspace => {
                app.search_input.pop();
                app.refresh_filter();
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.search_input.push(c);
                    app.refresh_filter();
                }
            }
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Tab => app.cycle_tab_right(),
        KeyCode::BackTab => app.cycle_tab_left(),
        KeyCode::Left => app.category_left(),
        KeyCode::Right => app.category_right(),
        KeyCode::Char(' ') => app.toggle_selected_current(),
        KeyCode::Char('/') => {
            app.search_mode = true;
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_filter();
                app.set_status("Search cleared.");
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => app.select_all(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear_selection(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.cycle_method(),
        KeyCode::Char('g') | KeyCode::Char('G') => generate_script(app),
        _ => {}
    }
    Flow::Continue
}
