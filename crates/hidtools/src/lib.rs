//! Command-line tools that synthesize one input action each.
//!
//! Every tool is a clap [`Parser`](clap::Parser) implementing [`Tool`]; its
//! binary is a one-line `main` calling [`main_for`]. Tools exit with status 0
//! on success and 1 on any failure, including usage errors, printing the
//! diagnostic to stderr.

mod cli;
pub use cli::{CommonArgs, TimingArgs, Tool, execute, main_for, parse_exit_code};

mod keyboard;
pub use keyboard::{SendKey, TypeText};

mod mouse;
pub use mouse::{MouseClick, MouseDrag, MouseMove, MousePosition, MouseScroll};
