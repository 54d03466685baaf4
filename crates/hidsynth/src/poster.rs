//! The seam between synthesis logic and the OS event tap.
use std::time::Duration;

use crate::{Point, Result, Synthetic};

/// Builds and posts synthetic events.
///
/// Implementations must build every event of a sequence before posting the
/// first one, so a construction failure never leaves a key or button held.
pub trait Poster: Send + Sync {
    /// Current cursor location in global display coordinates.
    fn cursor_location(&self) -> Result<Point>;

    /// Move the cursor without generating a mouse event.
    fn warp_cursor(&self, to: Point) -> Result<()>;

    /// Post `events` in order, sleeping `gap` between consecutive posts.
    fn post_sequence(&self, events: &[Synthetic], gap: Duration) -> Result<()>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use recording::{Posted, RecordingPoster};

#[cfg(any(test, feature = "test-utils"))]
mod recording {
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::Poster;
    use crate::{Error, Point, Result, Synthetic};

    /// One call observed by a [`RecordingPoster`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum Posted {
        /// `warp_cursor` was called.
        Warp(Point),
        /// `post_sequence` was called.
        Sequence {
            /// Events in post order.
            events: Vec<Synthetic>,
            /// Gap between consecutive posts.
            gap: Duration,
        },
    }

    /// Poster that records calls instead of touching the OS.
    ///
    /// The cursor starts at the configured location and follows warps.
    #[derive(Debug)]
    pub struct RecordingPoster {
        /// Current simulated cursor location.
        cursor: Mutex<Point>,
        /// Calls in order.
        log: Mutex<Vec<Posted>>,
        /// Number of `post_sequence` calls to accept before failing.
        fail_after: Mutex<Option<usize>>,
    }

    impl Default for RecordingPoster {
        fn default() -> Self {
            Self::at(Point::default())
        }
    }

    impl RecordingPoster {
        /// A recorder whose cursor starts at `cursor`.
        pub fn at(cursor: Point) -> Self {
            Self {
                cursor: Mutex::new(cursor),
                log: Mutex::new(Vec::new()),
                fail_after: Mutex::new(None),
            }
        }

        /// Make `post_sequence` fail with `EventCreate` once `n` sequences
        /// have been posted.
        pub fn fail_after(&self, n: usize) {
            *self.fail_after.lock() = Some(n);
        }

        /// Current simulated cursor location.
        pub fn cursor(&self) -> Point {
            *self.cursor.lock()
        }

        /// Every recorded call.
        pub fn calls(&self) -> Vec<Posted> {
            self.log.lock().clone()
        }

        /// Every posted event, flattened across sequences.
        pub fn events(&self) -> Vec<Synthetic> {
            self.log
                .lock()
                .iter()
                .filter_map(|p| match p {
                    Posted::Sequence { events, .. } => Some(events.clone()),
                    Posted::Warp(_) => None,
                })
                .flatten()
                .collect()
        }

        /// Number of `post_sequence` calls.
        pub fn sequences(&self) -> usize {
            self.log
                .lock()
                .iter()
                .filter(|p| matches!(p, Posted::Sequence { .. }))
                .count()
        }
    }

    impl Poster for RecordingPoster {
        fn cursor_location(&self) -> Result<Point> {
            Ok(self.cursor())
        }

        fn warp_cursor(&self, to: Point) -> Result<()> {
            *self.cursor.lock() = to;
            self.log.lock().push(Posted::Warp(to));
            Ok(())
        }

        fn post_sequence(&self, events: &[Synthetic], gap: Duration) -> Result<()> {
            let limit = *self.fail_after.lock();
            if limit.is_some_and(|n| self.sequences() >= n) {
                return Err(Error::EventCreate);
            }
            self.log.lock().push(Posted::Sequence {
                events: events.to_vec(),
                gap,
            });
            Ok(())
        }
    }
}
