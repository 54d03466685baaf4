//! Modifier keys and the CGEventFlags bits they set on key events.
use std::collections::HashSet;

use crate::Key;

const FLAG_CAPS_LOCK: u64 = 1 << 16;
const FLAG_SHIFT: u64 = 1 << 17;
const FLAG_CONTROL: u64 = 1 << 18;
const FLAG_OPTION: u64 = 1 << 19;
const FLAG_COMMAND: u64 = 1 << 20;
const FLAG_FUNCTION: u64 = 1 << 23;

/// Defines `Modifier` with each variant's flag bit. Every variant names the
/// `Key` it presses.
macro_rules! modifiers {
    ( $( $variant:ident => $flag:ident, )* ) => {
        /// A modifier key.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        #[allow(missing_docs)]
        pub enum Modifier {
            $( $variant, )*
        }

        impl Modifier {
            /// Every modifier.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// The key pressed for this modifier.
            pub fn key(self) -> Key {
                match self {
                    $( Self::$variant => Key::$variant, )*
                }
            }

            /// The modifier a key acts as, if any.
            pub fn from_key(key: Key) -> Option<Self> {
                match key {
                    $( Key::$variant => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// The CGEventFlags bit a key event carries while this modifier
            /// is held. Left and right variants share one bit.
            pub fn cg_flag_bits(self) -> u64 {
                match self {
                    $( Self::$variant => $flag, )*
                }
            }
        }
    };
}

modifiers! {
    Command => FLAG_COMMAND,
    Shift => FLAG_SHIFT,
    Option => FLAG_OPTION,
    Control => FLAG_CONTROL,
    CapsLock => FLAG_CAPS_LOCK,
    Function => FLAG_FUNCTION,
    RightCommand => FLAG_COMMAND,
    RightShift => FLAG_SHIFT,
    RightOption => FLAG_OPTION,
    RightControl => FLAG_CONTROL,
}

impl Modifier {
    /// Parses a modifier from any key spec that names a modifier key
    /// (`cmd`, `alt`, `Shift`, `rightoption`, ...).
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(Self::from_key)
    }

    /// Canonical spec, the same as the key's: `cmd`, `opt`, `ctrl`, `shift`.
    pub fn to_spec(self) -> String {
        self.key().to_spec()
    }
}

/// Combined CGEventFlags bits for a modifier set.
pub(crate) fn cg_flags_for(mods: &HashSet<Modifier>) -> u64 {
    mods.iter().fold(0, |acc, m| acc | m.cg_flag_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_back_to_modifiers() {
        for m in Modifier::ALL {
            assert_eq!(Modifier::from_key(m.key()), Some(*m));
        }
        assert_eq!(Modifier::from_key(Key::A), None);
    }

    #[test]
    fn specs() {
        assert_eq!(Modifier::from_spec("cmd"), Some(Modifier::Command));
        assert_eq!(Modifier::from_spec("Control"), Some(Modifier::Control));
        assert_eq!(Modifier::from_spec("alt"), Some(Modifier::Option));
        assert_eq!(Modifier::from_spec("caps"), Some(Modifier::CapsLock));
        assert_eq!(
            Modifier::from_spec("RightShift"),
            Some(Modifier::RightShift)
        );
        assert_eq!(Modifier::from_spec("esc"), None);

        assert_eq!(Modifier::Command.to_spec(), "cmd");
        assert_eq!(Modifier::Option.to_spec(), "opt");
        assert_eq!(Modifier::Shift.to_spec(), "shift");
        for m in Modifier::ALL {
            assert_eq!(Modifier::from_spec(&m.to_spec()), Some(*m));
        }
    }

    #[test]
    fn flag_bits() {
        let mods = HashSet::from([Modifier::Command, Modifier::Shift]);
        assert_eq!(cg_flags_for(&mods), (1 << 20) | (1 << 17));
        assert_eq!(Modifier::Control.cg_flag_bits(), 1 << 18);
        assert_eq!(Modifier::Option.cg_flag_bits(), 1 << 19);
        assert_eq!(
            Modifier::RightOption.cg_flag_bits(),
            Modifier::Option.cg_flag_bits()
        );
        assert_eq!(cg_flags_for(&HashSet::new()), 0);
    }
}
