//! Player view state and shared types.

use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthChar;

use crate::srt::Cue;

/// Result of processing an input event, returned to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the tick loop
    Continue,
    /// Exit the player
    Quit,
    /// A cue word was clicked; the loop resolves and saves it
    SaveWord { word_index: usize },
}

/// What is currently on screen.
///
/// The engine owns timing state; this struct only mirrors the last
/// reported cue for rendering and click resolution.
#[derive(Debug)]
pub struct PlayerView {
    pub source_name: String,
    /// Index of the displayed cue in the engine's table.
    pub current: Option<usize>,
    /// Displayed cue text, one entry per screen line.
    pub cue_lines: Vec<String>,
    pub saved_count: usize,
    /// Short-lived "saved 'word'" notice.
    flash: Option<(String, Instant)>,
    pub needs_render: bool,
}

impl PlayerView {
    /// First screen row used for cue text (row 0 is the title bar).
    pub const CUE_START_ROW: u16 = 2;

    /// How long the saved-word notice stays visible.
    const FLASH_DURATION: Duration = Duration::from_millis(1500);

    pub fn new(source_name: impl Into<String>, saved_count: usize) -> Self {
        PlayerView {
            source_name: source_name.into(),
            current: None,
            cue_lines: Vec::new(),
            saved_count,
            flash: None,
            needs_render: true,
        }
    }

    /// Mirror a cue change event.
    pub fn set_cue(&mut self, index: Option<usize>, cue: Option<&Cue>) {
        self.current = index;
        self.cue_lines = cue
            .map(|c| c.text.lines().map(str::to_string).collect())
            .unwrap_or_default();
        self.needs_render = true;
    }

    pub fn on_saved(&mut self, word: &str, now: Instant) {
        self.saved_count += 1;
        self.flash = Some((word.to_string(), now));
        self.needs_render = true;
    }

    pub fn flash_word(&self) -> Option<&str> {
        self.flash.as_ref().map(|(word, _)| word.as_str())
    }

    /// Drop an expired flash notice. Returns true when the screen needs a
    /// redraw because of it.
    pub fn expire_flash(&mut self, now: Instant) -> bool {
        match self.flash {
            Some((_, since)) if now.duration_since(since) >= Self::FLASH_DURATION => {
                self.flash = None;
                true
            }
            _ => false,
        }
    }

    /// Map a mouse click to a word index within the displayed cue.
    ///
    /// The index counts whitespace-separated words across all cue lines,
    /// matching `Cue::words` order.
    pub fn word_index_at(&self, row: u16, col: u16) -> Option<usize> {
        let line_idx = (row as usize).checked_sub(Self::CUE_START_ROW as usize)?;
        let line = self.cue_lines.get(line_idx)?;
        let within = word_at_column(line, col as usize)?;
        let words_before: usize = self.cue_lines[..line_idx]
            .iter()
            .map(|l| l.split_whitespace().count())
            .sum();
        Some(words_before + within)
    }
}

/// Which word of `line` covers display column `col`, if any.
///
/// Columns are display cells (wide characters span two), matching how the
/// line is rendered from column 0.
fn word_at_column(line: &str, col: usize) -> Option<usize> {
    let mut cell = 0usize;
    let mut word_index = 0usize;
    let mut in_word = false;

    for ch in line.chars() {
        let width = ch.width().unwrap_or(0);
        let is_space = ch.is_whitespace();

        if is_space {
            if in_word {
                word_index += 1;
                in_word = false;
            }
        } else {
            in_word = true;
        }

        if (cell..cell + width).contains(&col) {
            return if is_space { None } else { Some(word_index) };
        }
        cell += width;
    }

    None
}
