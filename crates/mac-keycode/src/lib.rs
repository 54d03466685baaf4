//! mac-keycode: Virtual keycodes and specs for macOS.
//!
//! - `Key`: Enum of the macOS virtual keycodes (`kVK_*` in HIToolbox
//!   `Events.h`) that input synthesis needs.
//! - `Modifier`: Enum of modifier keys with their `Key` and CGEventFlags bit.
//! - Spec helpers: `Key::from_spec`, `Key::to_spec`, and
//!   `Modifier::from_spec`, `Modifier::to_spec`.
//! - `Chord`: modifiers plus a key, parsed from `cmd+shift+z`.
//! - `Key::for_ascii`: the US ANSI key (and Shift state) that produces a
//!   printable ASCII character.
//!
//! Variant names follow the SDK constants with `ANSI_` stripped and digits
//! prefixed with `Digit`. Two keys are renamed after what they do rather than
//! the label printed on them: `kVK_Delete` is `Backspace` and
//! `kVK_ForwardDelete` is `ForwardDelete`.

mod key;
pub use key::{Key, Scancode};

mod spec;

mod modifiers;
pub use modifiers::Modifier;

mod chord;
pub use chord::Chord;

mod layout;
