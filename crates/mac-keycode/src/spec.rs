//! Key spec strings: the words and symbols accepted wherever a key is named
//! on the command line, as in `send-key esc` or `send-key cmd+shift+z`.
use crate::Key;

/// Keys written as the character they type on the US ANSI layout.
const SYMBOLS: &[(Key, &str)] = &[
    (Key::Digit0, "0"),
    (Key::Digit1, "1"),
    (Key::Digit2, "2"),
    (Key::Digit3, "3"),
    (Key::Digit4, "4"),
    (Key::Digit5, "5"),
    (Key::Digit6, "6"),
    (Key::Digit7, "7"),
    (Key::Digit8, "8"),
    (Key::Digit9, "9"),
    (Key::Space, " "),
    (Key::Minus, "-"),
    (Key::Equal, "="),
    (Key::LeftBracket, "["),
    (Key::RightBracket, "]"),
    (Key::Backslash, "\\"),
    (Key::Semicolon, ";"),
    (Key::Quote, "'"),
    (Key::Comma, ","),
    (Key::Period, "."),
    (Key::Slash, "/"),
    (Key::Grave, "`"),
];

/// Short words for keys, matched case-insensitively. The first word listed
/// for a key is its canonical spec.
const WORDS: &[(Key, &str)] = &[
    (Key::Escape, "esc"),
    (Key::Return, "enter"),
    (Key::Return, "ret"),
    (Key::Backspace, "bs"),
    (Key::ForwardDelete, "delete"),
    (Key::ForwardDelete, "del"),
    (Key::Space, "space"),
    (Key::LeftArrow, "left"),
    (Key::RightArrow, "right"),
    (Key::UpArrow, "up"),
    (Key::DownArrow, "down"),
    (Key::PageUp, "pgup"),
    (Key::PageDown, "pgdn"),
    (Key::Command, "cmd"),
    (Key::Control, "ctrl"),
    (Key::Option, "opt"),
    (Key::Option, "alt"),
    (Key::CapsLock, "caps"),
    (Key::Function, "fn"),
];

impl Key {
    /// Parses a key spec.
    ///
    /// In order of precedence:
    /// - a symbol exactly as typed (`1`, `,`, `/`, a single space, ...);
    /// - a variant name, case-insensitive (`Return`, `tab`, `F9`, `Backspace`);
    /// - a short word, case-insensitive: `esc`, `enter`, `ret`, `bs`,
    ///   `delete`, `del`, `space`, `left`, `right`, `up`, `down`, `pgup`,
    ///   `pgdn`, `cmd`, `ctrl`, `opt`, `alt`, `caps`, `fn`.
    ///
    /// `delete` is the forward-delete key. The key labelled delete on Mac
    /// keyboards is `backspace`.
    pub fn from_spec(s: &str) -> Option<Self> {
        lookup(SYMBOLS, |sym| sym == s)
            .or_else(|| Self::from_name(s))
            .or_else(|| lookup(WORDS, |word| word.eq_ignore_ascii_case(s)))
    }

    /// Canonical spec for this key: its short word if it has one, else its
    /// symbol, else its lowercased variant name.
    pub fn to_spec(self) -> String {
        spelling(WORDS, self)
            .or_else(|| spelling(SYMBOLS, self))
            .map_or_else(|| self.name().to_ascii_lowercase(), str::to_string)
    }
}

fn lookup(table: &[(Key, &str)], matches: impl Fn(&str) -> bool) -> Option<Key> {
    table.iter().find(|(_, s)| matches(*s)).map(|(k, _)| *k)
}

fn spelling(table: &[(Key, &'static str)], key: Key) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, s)| *s)
}
