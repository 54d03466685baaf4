//! `type-text` binary.
use std::process::ExitCode;

use hidtools::{TypeText, main_for};

fn main() -> ExitCode {
    main_for::<TypeText>()
}
