//! CoreGraphics-backed [`Poster`] that injects events at the HID event tap.
use std::time::Duration;

use core_graphics::{
    display::CGDisplay,
    event::{
        CGEvent, CGEventFlags, CGEventTapLocation, CGEventType, CGMouseButton, EventField,
        ScrollEventUnit,
    },
    event_source::{CGEventSource, CGEventSourceStateID},
    geometry::CGPoint,
};
use tracing::{trace, warn};

use crate::{
    Error, MouseAction, MouseButton, Point, Poster, Result, Stroke, Synthetic, timing::pause,
};

/// Posts events through CoreGraphics to the HID event tap.
#[derive(Debug, Clone, Default)]
pub struct MacPoster {
    /// When true, do not set the REMOUSE_TAG on injected events so upstream
    /// taps treat them like hardware input.
    untagged: bool,
}

impl MacPoster {
    /// Poster that tags every event with `eventtag::REMOUSE_TAG`.
    pub fn new() -> Self {
        Self { untagged: false }
    }

    /// Poster that leaves the event source user-data field alone.
    pub fn new_unlabeled() -> Self {
        Self { untagged: true }
    }

    /// Replace an opaque CoreGraphics failure with a permission error when a
    /// permission is the likely cause.
    fn explain(fallback: Error) -> Error {
        match permissions::check_permissions().missing() {
            Some(name) => {
                warn!(permission = name, "permission_missing_for_event");
                Error::PermissionDenied(name)
            }
            None => fallback,
        }
    }

    fn source() -> Result<CGEventSource> {
        CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|_| Self::explain(Error::EventSource))
    }

    fn build(&self, ev: &Synthetic) -> Result<CGEvent> {
        let source = Self::source()?;
        let event = match ev {
            Synthetic::Mouse { action, button, at } => CGEvent::new_mouse_event(
                source,
                mouse_event_type(*action, *button),
                CGPoint::new(at.x, at.y),
                cg_button(*button),
            ),
            Synthetic::Key {
                stroke: Stroke::Key { key, flags, text },
                down,
            } => CGEvent::new_keyboard_event(source, key.code(), *down).inspect(|e| {
                e.set_flags(CGEventFlags::from_bits_retain(*flags));
                if let Some(units) = text {
                    e.set_string_from_utf16_unchecked(units);
                }
            }),
            Synthetic::Key {
                stroke: Stroke::Unicode(units),
                down,
            } => CGEvent::new_keyboard_event(source, 0, *down).inspect(|e| {
                e.set_string_from_utf16_unchecked(units);
            }),
            Synthetic::Scroll { dx, dy } => {
                CGEvent::new_scroll_event(source, ScrollEventUnit::LINE, 2, *dy, *dx, 0)
            }
        }
        .map_err(|_| Self::explain(Error::EventCreate))?;
        // Tag injected events unless explicitly untagged
        if !self.untagged {
            event.set_integer_value_field(
                EventField::EVENT_SOURCE_USER_DATA,
                eventtag::REMOUSE_TAG,
            );
        }
        Ok(event)
    }
}

fn cg_button(button: MouseButton) -> CGMouseButton {
    match button {
        MouseButton::Left => CGMouseButton::Left,
        MouseButton::Right => CGMouseButton::Right,
        MouseButton::Middle => CGMouseButton::Center,
    }
}

fn mouse_event_type(action: MouseAction, button: MouseButton) -> CGEventType {
    match (action, button) {
        (MouseAction::Moved, _) => CGEventType::MouseMoved,
        (MouseAction::Down, MouseButton::Left) => CGEventType::LeftMouseDown,
        (MouseAction::Up, MouseButton::Left) => CGEventType::LeftMouseUp,
        (MouseAction::Dragged, MouseButton::Left) => CGEventType::LeftMouseDragged,
        (MouseAction::Down, MouseButton::Right) => CGEventType::RightMouseDown,
        (MouseAction::Up, MouseButton::Right) => CGEventType::RightMouseUp,
        (MouseAction::Dragged, MouseButton::Right) => CGEventType::RightMouseDragged,
        (MouseAction::Down, MouseButton::Middle) => CGEventType::OtherMouseDown,
        (MouseAction::Up, MouseButton::Middle) => CGEventType::OtherMouseUp,
        (MouseAction::Dragged, MouseButton::Middle) => CGEventType::OtherMouseDragged,
    }
}

impl Poster for MacPoster {
    fn cursor_location(&self) -> Result<Point> {
        let source = Self::source()?;
        let event = CGEvent::new(source).map_err(|_| Self::explain(Error::CursorLocation))?;
        let p = event.location();
        trace!(x = p.x, y = p.y, "cursor_location");
        Ok(Point::new(p.x, p.y))
    }

    fn warp_cursor(&self, to: Point) -> Result<()> {
        trace!(x = to.x, y = to.y, "warp_cursor");
        CGDisplay::warp_mouse_cursor_position(CGPoint::new(to.x, to.y)).map_err(Error::Warp)
    }

    fn post_sequence(&self, events: &[Synthetic], gap: Duration) -> Result<()> {
        let built = events
            .iter()
            .map(|ev| self.build(ev))
            .collect::<Result<Vec<_>>>()?;
        for (i, (ev, cg)) in events.iter().zip(&built).enumerate() {
            if i > 0 {
                pause(gap);
            }
            trace!(event = ?ev, "post");
            cg.post(CGEventTapLocation::HID);
        }
        Ok(())
    }
}
