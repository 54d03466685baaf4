//! Plain values that describe synthesized input.
use std::{error::Error as StdError, fmt, str::FromStr};

use mac_keycode::Key;

/// A point in global display coordinates (origin at the top-left of the main
/// display, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point moved by whole pixels.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + f64::from(dx), self.y + f64::from(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Middle button (CoreGraphics "center").
    Middle,
}

impl MouseButton {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mouse button name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseButtonError(String);

impl fmt::Display for ParseButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mouse button {:?} (expected left, right or middle)",
            self.0
        )
    }
}

impl StdError for ParseButtonError {}

impl FromStr for MouseButton {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "middle" | "center" => Ok(Self::Middle),
            _ => Err(ParseButtonError(s.to_string())),
        }
    }
}

/// What a mouse event does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Pointer moved while the button is held.
    Dragged,
    /// Pointer moved with no button held.
    Moved,
}

/// The payload of one keyboard down/up pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    /// A virtual-key-code event carrying CGEventFlags modifier bits.
    Key {
        /// Key to press.
        key: Key,
        /// CGEventFlags bits set on the event.
        flags: u64,
        /// Literal text attached to the event. When present the window
        /// server inserts it instead of whatever the active layout maps
        /// `key` to.
        text: Option<Vec<u16>>,
    },
    /// A Unicode string key event carrying literal UTF-16 code units.
    Unicode(Vec<u16>),
}

impl Stroke {
    /// A key-code stroke without modifiers or text.
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            flags: 0,
            text: None,
        }
    }

    /// A key-code stroke that types `c` whatever the keyboard layout.
    pub fn typed(key: Key, flags: u64, c: char) -> Self {
        let mut buf = [0u16; 2];
        Self::Key {
            key,
            flags,
            text: Some(c.encode_utf16(&mut buf).to_vec()),
        }
    }
}

/// One event to post to the HID event tap.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthetic {
    /// A mouse button or pointer event at a point.
    Mouse {
        /// Event kind.
        action: MouseAction,
        /// Button the event refers to.
        button: MouseButton,
        /// Location of the event.
        at: Point,
    },
    /// One half of a keyboard stroke.
    Key {
        /// Stroke payload.
        stroke: Stroke,
        /// True for key-down, false for key-up.
        down: bool,
    },
    /// A line-unit scroll wheel event.
    Scroll {
        /// Horizontal lines.
        dx: i32,
        /// Vertical lines.
        dy: i32,
    },
}
