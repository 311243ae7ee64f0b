//! Terminal player loop
//!
//! Drives the sync engine from a single thread: poll for input with the
//! tick interval as the timeout, tick the engine with a fresh wall-clock
//! instant, and redraw only when something changed. File parsing happens
//! before the loop starts; nothing inside the loop blocks on I/O except
//! the vocabulary save triggered by an explicit click.
//!
//! # Architecture
//!
//! - `state`: `PlayerView` (what is on screen) and `InputResult`
//! - `input`: keyboard/mouse dispatch
//! - `render`: full-screen repaint

mod input;
mod render;
pub mod state;

pub use state::{InputResult, PlayerView};

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;
use crate::srt::CueTable;
use crate::sync::SyncEngine;
use crate::vocab::VocabularyBook;

/// Run the player over a parsed cue table until the user quits.
///
/// `source_name` labels the title bar and vocabulary entries.
pub fn play_file(
    table: CueTable,
    source_name: &str,
    config: &Config,
    mut vocab: VocabularyBook,
    initial_offset_ms: i64,
) -> Result<()> {
    let mut engine = SyncEngine::new(table);
    engine.set_offset(initial_offset_ms);

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run_loop(&mut stdout, &mut engine, &mut vocab, source_name, config);

    // Restore the terminal even when the loop errored
    let _ = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn run_loop(
    stdout: &mut impl Write,
    engine: &mut SyncEngine,
    vocab: &mut VocabularyBook,
    source_name: &str,
    config: &Config,
) -> Result<()> {
    let mut view = PlayerView::new(source_name, vocab.stats().total_saves);
    let tick = Duration::from_millis(config.tick_interval_ms.max(1));

    loop {
        if event::poll(tick)? {
            let ev = event::read()?;
            let now = Instant::now();
            match input::handle_event(ev, engine, &mut view, config, now) {
                InputResult::Quit => break,
                InputResult::SaveWord { word_index } => {
                    save_clicked_word(engine, &mut view, vocab, word_index, now)?;
                }
                InputResult::Continue => {}
            }
            view.needs_render = true;
        }

        let now = Instant::now();
        if let Some(change) = engine.tick(now) {
            let cue = change.current.and_then(|i| engine.cue(i)).cloned();
            view.set_cue(change.current, cue.as_ref());
        }
        if view.expire_flash(now) {
            view.needs_render = true;
        }

        if view.needs_render {
            render::draw(stdout, &view, &engine.progress(now))?;
            view.needs_render = false;
        }
    }

    Ok(())
}

/// Resolve a clicked word against the displayed cue and persist it.
fn save_clicked_word(
    engine: &SyncEngine,
    view: &mut PlayerView,
    vocab: &mut VocabularyBook,
    word_index: usize,
    now: Instant,
) -> Result<()> {
    let Some(cue) = view.current.and_then(|i| engine.cue(i)) else {
        return Ok(());
    };
    let Some(ctx) = cue.word_context(word_index) else {
        return Ok(());
    };

    let word = ctx.word.to_string();
    let sentence = ctx.text.to_string();
    let start_ms = ctx.start_ms;
    let source = view.source_name.clone();

    vocab
        .add_word(&word, &sentence, start_ms, &source)
        .context("failed to save vocabulary entry")?;
    tracing::debug!(word = %word, start_ms, "saved vocabulary word");
    view.on_saved(&word, now);
    Ok(())
}
