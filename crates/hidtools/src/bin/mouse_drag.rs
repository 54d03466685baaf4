//! `mouse-drag` binary.
use std::process::ExitCode;

use hidtools::{MouseDrag, main_for};

fn main() -> ExitCode {
    main_for::<MouseDrag>()
}
