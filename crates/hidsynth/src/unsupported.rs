//! Stand-in poster for platforms without the CoreGraphics event tap.
use std::time::Duration;

use crate::{Error, Point, Poster, Result, Synthetic};

/// Fails every call with [`Error::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct MacPoster;

impl MacPoster {
    /// Same constructor as the macOS poster.
    pub fn new() -> Self {
        Self
    }

    /// Same constructor as the macOS poster.
    pub fn new_unlabeled() -> Self {
        Self
    }
}

impl Poster for MacPoster {
    fn cursor_location(&self) -> Result<Point> {
        Err(Error::Unsupported)
    }

    fn warp_cursor(&self, _to: Point) -> Result<()> {
        Err(Error::Unsupported)
    }

    fn post_sequence(&self, _events: &[Synthetic], _gap: Duration) -> Result<()> {
        Err(Error::Unsupported)
    }
}
