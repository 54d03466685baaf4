//! `mouse-scroll` binary.
use std::process::ExitCode;

use hidtools::{MouseScroll, main_for};

fn main() -> ExitCode {
    main_for::<MouseScroll>()
}
