//! Turning text into keyboard strokes.
//!
//! Text is normalized to NFC and walked one extended grapheme cluster at a
//! time. Printable ASCII goes out as a virtual-key-code event for its US ANSI
//! key with the character itself attached, so apps that read key codes see a
//! real key press while text fields receive the right character on any
//! layout. Everything else is sent as a Unicode string key event.

use mac_keycode::{Key, Modifier};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::Stroke;

/// Longest UTF-16 payload CoreGraphics accepts on one keyboard event.
pub const MAX_UNICODE_UNITS: usize = 20;

/// Normalize `text` to NFC.
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Plan the strokes that type `text`.
pub fn plan(text: &str) -> Vec<Stroke> {
    let normalized = normalize(text);
    let mut strokes = Vec::new();
    for grapheme in normalized.graphemes(true) {
        match key_for_grapheme(grapheme) {
            Some(stroke) => strokes.push(stroke),
            None => strokes.extend(unicode_strokes(grapheme)),
        }
    }
    strokes
}

/// The key-code stroke for a grapheme, if it has one.
fn key_for_grapheme(grapheme: &str) -> Option<Stroke> {
    match grapheme {
        "\n" | "\r" | "\r\n" => return Some(Stroke::key(Key::Return)),
        "\t" => return Some(Stroke::key(Key::Tab)),
        _ => {}
    }
    let mut chars = grapheme.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let (key, shift) = Key::for_ascii(c)?;
    let flags = if shift {
        Modifier::Shift.cg_flag_bits()
    } else {
        0
    };
    Some(Stroke::typed(key, flags, c))
}

/// Unicode string strokes for a grapheme, split so no payload exceeds
/// [`MAX_UNICODE_UNITS`]. Splits never separate a surrogate pair.
fn unicode_strokes(grapheme: &str) -> Vec<Stroke> {
    let mut out = Vec::new();
    let mut current: Vec<u16> = Vec::with_capacity(MAX_UNICODE_UNITS);
    let mut buf = [0u16; 2];
    for c in grapheme.chars() {
        let units = c.encode_utf16(&mut buf);
        if current.len() + units.len() > MAX_UNICODE_UNITS {
            out.push(Stroke::Unicode(std::mem::take(&mut current)));
        }
        current.extend_from_slice(units);
    }
    if !current.is_empty() {
        out.push(Stroke::Unicode(current));
    }
    out
}
