//! Synthesizes mouse and keyboard input on macOS.
//!
//! A [`Synth`] turns high-level actions (move, click, drag, scroll, type,
//! press a chord) into sequences of [`Synthetic`] events and hands them to a
//! [`Poster`]. The production poster, [`MacPoster`], builds CoreGraphics
//! events and posts them to the HID event tap.
//!
//! Every down event is paired with its up event inside one sequence, and a
//! poster builds the whole sequence before posting any of it, so a failure
//! never leaves a key or mouse button held.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]
use std::{sync::Arc, time::Duration};

use mac_keycode::{Chord, Key};
use tracing::{debug, info};

mod error;
pub use error::{Error, Result};

mod types;
pub use types::{MouseAction, MouseButton, ParseButtonError, Point, Stroke, Synthetic};

mod poster;
#[cfg(any(test, feature = "test-utils"))]
pub use poster::{Posted, RecordingPoster};
pub use poster::Poster;

pub mod text;

mod timing;
pub use timing::Timing;
use timing::pause;

#[cfg(target_os = "macos")]
mod mac;
#[cfg(target_os = "macos")]
pub use mac::MacPoster;

#[cfg(not(target_os = "macos"))]
mod unsupported;
#[cfg(not(target_os = "macos"))]
pub use unsupported::MacPoster;

/// High-level input synthesis over a [`Poster`].
#[derive(Clone)]
pub struct Synth {
    poster: Arc<dyn Poster>,
    timing: Timing,
}

impl Default for Synth {
    fn default() -> Self {
        Self::new()
    }
}

impl Synth {
    /// Synthesizer over the system poster, tagging every event.
    pub fn new() -> Self {
        Self::with_poster(Arc::new(MacPoster::new()))
    }

    /// Synthesizer that does NOT tag events with REMOUSE_TAG.
    pub fn new_unlabeled() -> Self {
        Self::with_poster(Arc::new(MacPoster::new_unlabeled()))
    }

    /// Synthesizer over a caller-supplied poster with default timing.
    pub fn with_poster(poster: Arc<dyn Poster>) -> Self {
        Self {
            poster,
            timing: Timing::default(),
        }
    }

    /// Replace the timing.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Move the cursor by whole pixels from where it is now.
    ///
    /// Returns the new location.
    pub fn move_by(&self, dx: i32, dy: i32) -> Result<Point> {
        let from = self.poster.cursor_location()?;
        let to = from.offset(dx, dy);
        self.move_to(to)?;
        info!(dx, dy, x = to.x, y = to.y, "mouse_moved_by");
        Ok(to)
    }

    /// Move the cursor to an absolute point.
    ///
    /// Warps the cursor, then posts a mouse-moved event so hover state under
    /// the pointer updates.
    pub fn move_to(&self, to: Point) -> Result<()> {
        self.poster.warp_cursor(to)?;
        self.poster.post_sequence(
            &[Synthetic::Mouse {
                action: MouseAction::Moved,
                button: MouseButton::Left,
                at: to,
            }],
            Duration::ZERO,
        )?;
        debug!(x = to.x, y = to.y, "mouse_moved_to");
        Ok(())
    }

    /// Press and release `button` at the current cursor location.
    ///
    /// Returns where the click landed.
    pub fn click(&self, button: MouseButton) -> Result<Point> {
        let at = self.poster.cursor_location()?;
        let events = [
            Synthetic::Mouse {
                action: MouseAction::Down,
                button,
                at,
            },
            Synthetic::Mouse {
                action: MouseAction::Up,
                button,
                at,
            },
        ];
        self.poster.post_sequence(&events, self.timing.click_hold)?;
        info!(%button, x = at.x, y = at.y, "mouse_clicked");
        Ok(at)
    }

    /// Drag with the left button from `from` to `to`.
    pub fn drag(&self, from: Point, to: Point) -> Result<()> {
        self.move_to(from)?;
        let button = MouseButton::Left;
        let events = [
            Synthetic::Mouse {
                action: MouseAction::Down,
                button,
                at: from,
            },
            Synthetic::Mouse {
                action: MouseAction::Dragged,
                button,
                at: to,
            },
            Synthetic::Mouse {
                action: MouseAction::Up,
                button,
                at: to,
            },
        ];
        self.poster.post_sequence(&events, self.timing.click_hold)?;
        info!(%from, %to, "mouse_dragged");
        Ok(())
    }

    /// Scroll by whole lines. Positive `dy` scrolls up, positive `dx` left.
    pub fn scroll(&self, dx: i32, dy: i32) -> Result<()> {
        self.poster
            .post_sequence(&[Synthetic::Scroll { dx, dy }], Duration::ZERO)?;
        info!(dx, dy, "scrolled");
        Ok(())
    }

    /// Press and release a single key with no modifiers.
    pub fn press_key(&self, key: Key) -> Result<()> {
        self.press_chord(&Chord::bare(key))
    }

    /// Press the chord's modifiers, press and release its key, then release
    /// the modifiers in reverse order.
    pub fn press_chord(&self, chord: &Chord) -> Result<()> {
        let mods = chord.modifier_keys();
        let key = Stroke::Key {
            key: chord.key,
            flags: chord.cg_flags(),
            text: None,
        };
        let mut events: Vec<Synthetic> = mods
            .iter()
            .map(|k| Synthetic::Key {
                stroke: Stroke::key(*k),
                down: true,
            })
            .collect();
        events.push(Synthetic::Key {
            stroke: key.clone(),
            down: true,
        });
        events.push(Synthetic::Key {
            stroke: key,
            down: false,
        });
        events.extend(mods.iter().rev().map(|k| Synthetic::Key {
            stroke: Stroke::key(*k),
            down: false,
        }));
        self.poster.post_sequence(&events, self.timing.key_hold)?;
        info!(%chord, "key_pressed");
        Ok(())
    }

    /// Type `text` stroke by stroke.
    ///
    /// Returns the number of strokes posted. Each stroke is one down/up pair
    /// followed by the character delay.
    pub fn type_text(&self, text: &str) -> Result<usize> {
        let strokes = text::plan(text);
        for stroke in &strokes {
            let events = [
                Synthetic::Key {
                    stroke: stroke.clone(),
                    down: true,
                },
                Synthetic::Key {
                    stroke: stroke.clone(),
                    down: false,
                },
            ];
            self.poster.post_sequence(&events, self.timing.key_hold)?;
            pause(self.timing.char_delay);
        }
        info!(strokes = strokes.len(), chars = text.chars().count(), "text_typed");
        Ok(strokes.len())
    }
}
