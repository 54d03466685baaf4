//! Characters produced by keys on the US ANSI layout.

use crate::Key;

impl Key {
    /// The US ANSI key that types `c`, and whether Shift must be held.
    ///
    /// Covers printable ASCII (0x20..=0x7E). Anything else has no key-code
    /// mapping and returns `None`.
    pub fn for_ascii(c: char) -> Option<(Self, bool)> {
        if c.is_ascii_lowercase() {
            return letter(c.to_ascii_uppercase()).map(|k| (k, false));
        }
        if c.is_ascii_uppercase() {
            return letter(c).map(|k| (k, true));
        }
        let mapped = match c {
            ' ' => (Self::Space, false),
            '0' => (Self::Digit0, false),
            '1' => (Self::Digit1, false),
            '2' => (Self::Digit2, false),
            '3' => (Self::Digit3, false),
            '4' => (Self::Digit4, false),
            '5' => (Self::Digit5, false),
            '6' => (Self::Digit6, false),
            '7' => (Self::Digit7, false),
            '8' => (Self::Digit8, false),
            '9' => (Self::Digit9, false),
            ')' => (Self::Digit0, true),
            '!' => (Self::Digit1, true),
            '@' => (Self::Digit2, true),
            '#' => (Self::Digit3, true),
            '$' => (Self::Digit4, true),
            '%' => (Self::Digit5, true),
            '^' => (Self::Digit6, true),
            '&' => (Self::Digit7, true),
            '*' => (Self::Digit8, true),
            '(' => (Self::Digit9, true),
            '-' => (Self::Minus, false),
            '_' => (Self::Minus, true),
            '=' => (Self::Equal, false),
            '+' => (Self::Equal, true),
            '[' => (Self::LeftBracket, false),
            '{' => (Self::LeftBracket, true),
            ']' => (Self::RightBracket, false),
            '}' => (Self::RightBracket, true),
            '\\' => (Self::Backslash, false),
            '|' => (Self::Backslash, true),
            ';' => (Self::Semicolon, false),
            ':' => (Self::Semicolon, true),
            '\'' => (Self::Quote, false),
            '"' => (Self::Quote, true),
            ',' => (Self::Comma, false),
            '<' => (Self::Comma, true),
            '.' => (Self::Period, false),
            '>' => (Self::Period, true),
            '/' => (Self::Slash, false),
            '?' => (Self::Slash, true),
            '`' => (Self::Grave, false),
            '~' => (Self::Grave, true),
            _ => return None,
        };
        Some(mapped)
    }
}

fn letter(upper: char) -> Option<Key> {
    let mut buf = [0u8; 4];
    Key::from_name(upper.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(Key::for_ascii('a'), Some((Key::A, false)));
        assert_eq!(Key::for_ascii('Z'), Some((Key::Z, true)));
        for c in 'a'..='z' {
            let (k, shift) = Key::for_ascii(c).expect("letter");
            assert!(!shift);
            assert_eq!(k.name(), c.to_ascii_uppercase().to_string());
        }
    }

    #[test]
    fn every_printable_ascii_has_a_key() {
        for b in 0x20u8..=0x7E {
            assert!(Key::for_ascii(b as char).is_some(), "{:?}", b as char);
        }
    }

    #[test]
    fn shifted_symbols() {
        assert_eq!(Key::for_ascii('!'), Some((Key::Digit1, true)));
        assert_eq!(Key::for_ascii('?'), Some((Key::Slash, true)));
        assert_eq!(Key::for_ascii('"'), Some((Key::Quote, true)));
        assert_eq!(Key::for_ascii('7'), Some((Key::Digit7, false)));
    }

    #[test]
    fn non_printable_and_non_ascii() {
        assert_eq!(Key::for_ascii('\n'), None);
        assert_eq!(Key::for_ascii('\u{7f}'), None);
        assert_eq!(Key::for_ascii('é'), None);
        assert_eq!(Key::for_ascii('ệ'), None);
    }
}
