//! Input handling for the player loop.
//!
//! Keyboard carries the playback commands; a mouse click on a cue word
//! asks the loop to save it to the vocabulary book.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Config;
use crate::player::state::{InputResult, PlayerView};
use crate::sync::SyncEngine;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    engine: &mut SyncEngine,
    view: &mut PlayerView,
    config: &Config,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, engine, view, config, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, view),
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

/// Handle a keyboard event.
fn handle_key_event(
    key: KeyEvent,
    engine: &mut SyncEngine,
    view: &mut PlayerView,
    config: &Config,
    now: Instant,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback ===
        KeyCode::Char(' ') => {
            engine.toggle(now);
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            engine.reset();
            view.set_cue(None, None);
            InputResult::Continue
        }

        // === Offset: coarse steps ===
        KeyCode::Char('+') | KeyCode::Char('=') => {
            engine.adjust_offset(config.sync_step_ms);
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            engine.adjust_offset(-config.sync_step_ms);
            InputResult::Continue
        }

        // === Offset: fine steps ===
        KeyCode::Right => {
            engine.adjust_offset(config.fine_step_ms);
            InputResult::Continue
        }
        KeyCode::Left => {
            engine.adjust_offset(-config.fine_step_ms);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Handle a mouse event: left click on a displayed word saves it.
fn handle_mouse_event(mouse: MouseEvent, view: &PlayerView) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(word_index) = view.word_index_at(mouse.row, mouse.column) {
            return InputResult::SaveWord { word_index };
        }
    }
    InputResult::Continue
}
