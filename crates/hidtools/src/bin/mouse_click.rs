//! `mouse-click` binary.
use std::process::ExitCode;

use hidtools::{MouseClick, main_for};

fn main() -> ExitCode {
    main_for::<MouseClick>()
}
