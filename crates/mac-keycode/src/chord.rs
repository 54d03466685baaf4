use std::{collections::HashSet, fmt};

use crate::{Key, Modifier, modifiers::cg_flags_for};

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chord {
    /// Set of modifier keys held down for this chord.
    pub modifiers: HashSet<Modifier>,
    /// The key pressed while the modifiers are held.
    pub key: Key,
}

impl Chord {
    /// A chord with no modifiers.
    pub fn bare(key: Key) -> Self {
        Self {
            modifiers: HashSet::new(),
            key,
        }
    }

    /// Parses a chord specification of the form "shift+opt+k".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key spec.
    /// - Modifiers may use aliases handled by `Modifier::from_spec` (e.g., cmd/ctrl/opt/alt/shift).
    /// - The key accepts the full `Key::from_spec` space (digits, punctuation, aliases, or names).
    /// - A lone "+" is the key that types "+" (shift+equal).
    pub fn parse(s: &str) -> Option<Self> {
        if s == "+" {
            return Some(Self {
                modifiers: HashSet::from([Modifier::Shift]),
                key: Key::Equal,
            });
        }
        let mut buf: Vec<&str> = s.split('+').collect();
        let key_raw = buf.pop()?;
        // Keep a raw " " so a literal space still parses.
        let key = if key_raw == " " {
            Key::from_spec(" ")
        } else {
            Key::from_spec(key_raw.trim())
        }?;
        let mut modifiers = HashSet::new();
        for m in buf {
            let mt = m.trim();
            if mt.is_empty() {
                return None;
            }
            modifiers.insert(Modifier::from_spec(mt)?);
        }
        Some(Self { modifiers, key })
    }

    fn modifier_order(m: &Modifier) -> usize {
        match m {
            // Canonical order: Command, Option, Control, Shift, Function, CapsLock, Right*
            Modifier::Command => 0,
            Modifier::Option => 1,
            Modifier::Control => 2,
            Modifier::Shift => 3,
            Modifier::Function => 4,
            Modifier::CapsLock => 5,
            Modifier::RightCommand => 6,
            Modifier::RightControl => 7,
            Modifier::RightOption => 8,
            Modifier::RightShift => 9,
        }
    }

    /// Modifiers in canonical order.
    pub fn ordered_modifiers(&self) -> Vec<Modifier> {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(Self::modifier_order);
        mods
    }

    /// Modifier keys to press before the chord key, in press order.
    ///
    /// A generic modifier and its right-hand twin collapse to one key press;
    /// the left key is used unless only the right variant was asked for.
    /// Release in the reverse order.
    pub fn modifier_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = Vec::new();
        for m in self.ordered_modifiers() {
            let k = match m {
                Modifier::RightCommand if self.modifiers.contains(&Modifier::Command) => continue,
                Modifier::RightControl if self.modifiers.contains(&Modifier::Control) => continue,
                Modifier::RightOption if self.modifiers.contains(&Modifier::Option) => continue,
                Modifier::RightShift if self.modifiers.contains(&Modifier::Shift) => continue,
                other => other.key(),
            };
            keys.push(k);
        }
        keys
    }

    /// CGEventFlags bits carried by the key event of this chord.
    pub fn cg_flags(&self) -> u64 {
        cg_flags_for(&self.modifiers)
    }

    /// Returns the canonical string form of this chord using:
    /// - Canonical modifier order (Command, Option, Control, Shift, Function, CapsLock, Right*...) and
    /// - Canonical spec name for each component (via Modifier::to_spec and Key::to_spec).
    pub fn to_string_canonical(&self) -> String {
        let mut out: Vec<String> = self
            .ordered_modifiers()
            .into_iter()
            .map(Modifier::to_spec)
            .collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_chord() {
        let c = Chord::parse("shift+opt+k").expect("parse");
        assert!(c.modifiers.contains(&Modifier::Shift));
        assert!(c.modifiers.contains(&Modifier::Option));
        assert_eq!(c.key, Key::K);
        // Canonical order and lowercase specs
        assert_eq!(c.to_string(), "opt+shift+k");
    }

    #[test]
    fn digit_and_punct() {
        let c1 = Chord::parse("cmd+1").expect("parse");
        assert!(c1.modifiers.contains(&Modifier::Command));
        assert_eq!(c1.key, Key::Digit1);
        assert_eq!(c1.to_string(), "cmd+1");

        let c2 = Chord::parse("ctrl+, ").expect("parse");
        assert!(c2.modifiers.contains(&Modifier::Control));
        assert_eq!(c2.key, Key::Comma);
        assert_eq!(c2.to_string(), "ctrl+,");
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(Chord::parse("enter"), Some(Chord::bare(Key::Return)));
        assert_eq!(Chord::parse("Return"), Some(Chord::bare(Key::Return)));
        assert_eq!(Chord::parse("ESC"), Some(Chord::bare(Key::Escape)));
        assert_eq!(Chord::parse("delete"), Some(Chord::bare(Key::ForwardDelete)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Chord::parse(""), None);
        assert_eq!(Chord::parse("cmd+"), None);
        assert_eq!(Chord::parse("+a"), None);
        assert_eq!(Chord::parse("a+b"), None);
    }

    #[test]
    fn lone_plus_is_shifted_equal() {
        let c = Chord::parse("+").expect("parse");
        assert_eq!(c.key, Key::Equal);
        assert!(c.modifiers.contains(&Modifier::Shift));
    }

    #[test]
    fn modifier_keys_prefer_left_variants() {
        let c = Chord::parse("cmd+shift+z").expect("parse");
        assert_eq!(c.modifier_keys(), vec![Key::Command, Key::Shift]);
        assert_eq!(c.cg_flags(), (1 << 20) | (1 << 17));

        let only_right = Chord {
            modifiers: HashSet::from([Modifier::RightOption]),
            key: Key::A,
        };
        assert_eq!(only_right.modifier_keys(), vec![Key::RightOption]);

        let both = Chord {
            modifiers: HashSet::from([Modifier::Option, Modifier::RightOption]),
            key: Key::A,
        };
        assert_eq!(both.modifier_keys(), vec![Key::Option]);
    }

    #[test]
    fn idempotence_roundtrip() {
        let inputs = ["shift+opt+k", "CTRL+ALT+Space", "Command+Digit1", "fn+pgdn"];
        for s in inputs {
            let c = Chord::parse(s).expect("parse");
            let spec = c.to_string();
            let c2 = Chord::parse(&spec).expect("reparse");
            assert_eq!(c, c2, "idempotent for {} => {}", s, spec);
        }
    }
}
