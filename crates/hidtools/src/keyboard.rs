//! Keyboard tools.
use clap::Parser;
use hidsynth::Synth;
use mac_keycode::Chord;

use crate::{CommonArgs, Tool};

/// Type text into the focused application.
#[derive(Parser, Debug)]
#[command(
    name = "type-text",
    about = "Type text, including non-ASCII characters, into the focused app",
    version
)]
pub struct TypeText {
    /// Text to type; several arguments are joined with single spaces
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "TEXT"
    )]
    pub words: Vec<String>,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl TypeText {
    /// The text to type.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

impl Tool for TypeText {
    const DOING: &'static str = "typing text";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.type_text(&self.text()).map(|_| ())
    }
}

fn parse_chord(s: &str) -> Result<Chord, String> {
    Chord::parse(s).ok_or_else(|| format!("unknown key or chord {s:?}"))
}

/// Press and release a named key or chord.
#[derive(Parser, Debug)]
#[command(
    name = "send-key",
    about = "Press a key or chord such as enter, esc, or cmd+shift+z",
    version
)]
pub struct SendKey {
    /// Key or chord: enter, escape, tab, backspace, delete, space, up, down,
    /// left, right, f1..f20, or modifiers joined with "+" (cmd+shift+z)
    #[arg(value_parser = parse_chord, value_name = "KEY")]
    pub chord: Chord,

    /// Shared flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl Tool for SendKey {
    const DOING: &'static str = "sending key";

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn run(&self, synth: &Synth) -> hidsynth::Result<()> {
        synth.press_chord(&self.chord)
    }
}
