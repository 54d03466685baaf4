//! `mouse-position` binary.
use std::process::ExitCode;

use hidtools::{MousePosition, main_for};

fn main() -> ExitCode {
    main_for::<MousePosition>()
}
