//! `mouse-move` binary.
use std::process::ExitCode;

use hidtools::{MouseMove, main_for};

fn main() -> ExitCode {
    main_for::<MouseMove>()
}
