//! `send-key` binary.
use std::process::ExitCode;

use hidtools::{SendKey, main_for};

fn main() -> ExitCode {
    main_for::<SendKey>()
}
