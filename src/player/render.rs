//! Screen rendering for the player loop.
//!
//! The loop redraws only on change events and input, so rendering always
//! repaints the whole (small) screen.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use crate::player::state::PlayerView;
use crate::sync::Progress;

/// Repaint the full player screen.
pub fn draw(stdout: &mut impl Write, view: &PlayerView, progress: &Progress) -> Result<()> {
    let (cols, rows) = terminal::size()?;

    queue!(stdout, Clear(ClearType::All))?;

    // Title bar
    queue!(
        stdout,
        MoveTo(0, 0),
        SetAttribute(Attribute::Dim),
        Print(fit(&format!("subsync - {}", view.source_name), cols as usize)),
        SetAttribute(Attribute::Reset),
    )?;

    // Cue text (or a hint while nothing is displayed)
    if view.cue_lines.is_empty() {
        let hint = if progress.running {
            "(no subtitle)"
        } else {
            "(stopped - press space when the movie starts)"
        };
        queue!(
            stdout,
            MoveTo(0, PlayerView::CUE_START_ROW),
            SetAttribute(Attribute::Dim),
            Print(hint),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        for (i, line) in view.cue_lines.iter().enumerate() {
            queue!(
                stdout,
                MoveTo(0, PlayerView::CUE_START_ROW + i as u16),
                SetAttribute(Attribute::Bold),
                Print(fit(line, cols as usize)),
                SetAttribute(Attribute::Reset),
            )?;
        }
    }

    // Status bar on the last row
    queue!(
        stdout,
        MoveTo(0, rows.saturating_sub(1)),
        SetAttribute(Attribute::Dim),
        Print(fit(&status_line(view, progress), cols as usize)),
        SetAttribute(Attribute::Reset),
    )?;

    stdout.flush()?;
    Ok(())
}

/// Build the status bar text.
fn status_line(view: &PlayerView, progress: &Progress) -> String {
    let state = if progress.running { "playing" } else { "stopped" };
    let mut line = format!(
        "[{state}] {}/{}  offset {:+} ms  saved {}",
        Progress::format_mmss(progress.adjusted_ms),
        Progress::format_mmss(progress.total_ms),
        progress.offset_ms,
        view.saved_count,
    );
    if let Some(word) = view.flash_word() {
        line.push_str(&format!("  saved '{word}'"));
    } else {
        line.push_str("  |  space start/pause  +/- and arrows offset  r reset  q quit");
    }
    line
}

/// Truncate a string to a display width.
fn fit(text: &str, max_cells: usize) -> String {
    let mut out = String::new();
    let mut cells = 0usize;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if cells + width > max_cells {
            break;
        }
        out.push(ch);
        cells += width;
    }
    out
}
