//! Mouse tools.
use clap::Parser;
use hidsynth::{MouseButton, Point, Synth};

use crate::{CommonArgs, Tool};

/// Move the mouse cursor by a relative offset.
#[derive(Parser, Debug)]
#[command(name = "mouse-move", about = "Move the mouse cursor by dx, dy pixels", version)]
pub struct MouseMove {
    /// Horizontal offset in pixels (negative moves left)
    #[arg(allow_negative_numbers = true)]
    pub dx: i32,

    /// Vertical offset in pixels (negative moves up)
    #[arg(allow_negative_numbers = true)]
    pub dy: i32,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for MouseMove {
    const DOING: &'static str = "moving mouse";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.move_by(self.dx, self.dy).map(|_| ())
    }
}

/// Put the mouse cursor at an absolute position.
#[derive(Parser, Debug)]
#[command(
    name = "mouse-position",
    about = "Move the mouse cursor to absolute x, y",
    version
)]
pub struct MousePosition {
    /// Horizontal position in global display coordinates
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// Vertical position in global display coordinates
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for MousePosition {
    const DOING: &'static str = "setting mouse position";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.move_to(Point::from((self.x, self.y)))
    }
}

/// Click a mouse button at the current cursor position.
#[derive(Parser, Debug)]
#[command(
    name = "mouse-click",
    about = "Click a mouse button at the cursor",
    version
)]
pub struct MouseClick {
    /// Button to click: left, right or middle
    #[arg(default_value = "left")]
    pub button: MouseButton,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for MouseClick {
    const DOING: &'static str = "clicking mouse";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.click(self.button).map(|_| ())
    }
}

/// Scroll the wheel by whole lines.
#[derive(Parser, Debug)]
#[command(name = "mouse-scroll", about = "Scroll by dx, dy lines", version)]
pub struct MouseScroll {
    /// Horizontal lines (positive scrolls left)
    #[arg(allow_negative_numbers = true)]
    pub dx: i32,

    /// Vertical lines (positive scrolls up)
    #[arg(allow_negative_numbers = true)]
    pub dy: i32,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for MouseScroll {
    const DOING: &'static str = "scrolling";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.scroll(self.dx, self.dy)
    }
}

/// Drag with the left button between two absolute points.
#[derive(Parser, Debug)]
#[command(
    name = "mouse-drag",
    about = "Drag with the left button from x1, y1 to x2, y2",
    version
)]
pub struct MouseDrag {
    /// Start x
    #[arg(allow_negative_numbers = true)]
    pub x1: i32,
    /// Start y
    #[arg(allow_negative_numbers = true)]
    pub y1: i32,
    /// End x
    #[arg(allow_negative_numbers = true)]
    pub x2: i32,
    /// End y
    #[arg(allow_negative_numbers = true)]
    pub y2: i32,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for MouseDrag {
    const DOING: &'static str = "dragging mouse";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.drag(
            Point::from((self.x1, self.y1)),
            Point::from((self.x2, self.y2)),
        )
    }
}
