//! Arguments shared by every tool, and the common entry point.
use std::{fmt::Debug, process::ExitCode};

use clap::{Args, Parser};
use hidsynth::{Synth, Timing};
use logging::LogArgs;
use tracing::error;

/// Delay settings, overridable from the environment.
#[derive(Debug, Clone, Args)]
pub struct TimingArgs {
    /// How long a mouse button is held during a click, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        env = "REMOUSE_CLICK_HOLD_MS",
        default_value_t = Timing::CLICK_HOLD_MS
    )]
    pub click_hold_ms: u64,

    /// How long each key is held, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        env = "REMOUSE_KEY_HOLD_MS",
        default_value_t = Timing::KEY_HOLD_MS
    )]
    pub key_hold_ms: u64,

    /// Pause between typed characters, in milliseconds
    #[arg(
        long,
        value_name = "MS",
        env = "REMOUSE_CHAR_DELAY_MS",
        default_value_t = Timing::CHAR_DELAY_MS
    )]
    pub char_delay_ms: u64,
}

impl TimingArgs {
    /// The timing these arguments describe.
    pub fn timing(&self) -> Timing {
        Timing::from_millis(self.click_hold_ms, self.key_hold_ms, self.char_delay_ms)
    }
}

/// Flags accepted by every tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Logging controls
    #[command(flatten)]
    pub log: LogArgs,

    /// Delay controls
    #[command(flatten)]
    pub timing: TimingArgs,

    /// Do not mark posted events with the remouse tag
    #[arg(long)]
    pub untagged: bool,
}

impl CommonArgs {
    /// Synthesizer over the system event tap configured from these flags.
    pub fn synth(&self) -> Synth {
        let synth = if self.untagged {
            Synth::new_unlabeled()
        } else {
            Synth::new()
        };
        synth.with_timing(self.timing.timing())
    }
}

/// One command-line tool.
pub trait Tool: Parser + Debug {
    /// What the tool was doing, for the failure line `Error <doing>: <err>`.
    const DOING: &'static str;

    /// Shared flags.
    fn common(&self) -> &CommonArgs;

    /// Perform the action.
    fn run(&self, synth: &Synth) -> hidsynth::Result<()>;
}

/// Exit status for a clap parse outcome: 0 for `--help`/`--version`, 1 for
/// real usage errors.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Run a parsed tool and map the outcome to an exit status.
pub fn execute<T: Tool>(tool: &T, synth: &Synth) -> u8 {
    match tool.run(synth) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, doing = T::DOING, "tool_failed");
            eprintln!("Error {}: {}", T::DOING, e);
            1
        }
    }
}

/// Entry point shared by every binary.
pub fn main_for<T: Tool>() -> ExitCode {
    let tool = match T::try_parse() {
        Ok(t) => t,
        Err(e) => {
            let code = parse_exit_code(&e);
            // Printing can only fail if stderr/stdout is closed.
            let _ignored = e.print();
            return ExitCode::from(code);
        }
    };
    logging::init(&tool.common().log);
    let synth = tool.common().synth();
    ExitCode::from(execute(&tool, &synth))
}
