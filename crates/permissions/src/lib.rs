//! Simple, macOS-only permission checks for remouse.
//!
//! This crate exposes a minimal API to query whether the process may post
//! synthesized input. It calls into the respective macOS frameworks and
//! returns booleans. There is no prompting logic here: the caller decides what
//! to tell the user when a permission is missing.
//!
//! Notes
//! - `accessibility_ok()` checks the global Accessibility permission.
//! - `post_event_ok()` checks the permission that gates posting events to the
//!   HID event tap.
//! - `check_permissions()` returns both as a simple status struct.
//!
//! All calls are fast and side‑effect free. On platforms other than macOS
//! every check reports `false`.

#[cfg(target_os = "macos")]
mod sys {
    #[link(name = "ApplicationServices", kind = "framework")]
    unsafe extern "C" {
        fn AXIsProcessTrusted() -> bool;
        fn CGPreflightPostEventAccess() -> bool;
    }

    pub(crate) fn accessibility_ok() -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    pub(crate) fn post_event_ok() -> bool {
        unsafe { CGPreflightPostEventAccess() }
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    pub(crate) fn accessibility_ok() -> bool {
        false
    }

    pub(crate) fn post_event_ok() -> bool {
        false
    }
}

/// Check if the process is trusted for Accessibility.
pub fn accessibility_ok() -> bool {
    sys::accessibility_ok()
}

/// Check if the process may post events to the HID event tap.
///
/// Returns `true` when synthesized keyboard and mouse events will be
/// delivered, and `false` otherwise.
pub fn post_event_ok() -> bool {
    sys::post_event_ok()
}

/// Current permission status for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionsStatus {
    /// Accessibility (AX) permission; `true` if granted.
    pub accessibility_ok: bool,
    /// Event posting permission; `true` if granted.
    pub post_event_ok: bool,
}

impl PermissionsStatus {
    /// Name of the first missing permission, if any.
    pub fn missing(&self) -> Option<&'static str> {
        if !self.accessibility_ok {
            Some("Accessibility")
        } else if !self.post_event_ok {
            Some("PostEvent")
        } else {
            None
        }
    }
}

/// Query both Accessibility and event posting permissions.
///
/// This is a convenience wrapper over [`accessibility_ok`] and
/// [`post_event_ok`]. The function performs no prompting and has no
/// side effects.
pub fn check_permissions() -> PermissionsStatus {
    PermissionsStatus {
        accessibility_ok: accessibility_ok(),
        post_event_ok: post_event_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reports_accessibility_first() {
        let none = PermissionsStatus {
            accessibility_ok: false,
            post_event_ok: false,
        };
        assert_eq!(none.missing(), Some("Accessibility"));

        let no_post = PermissionsStatus {
            accessibility_ok: true,
            post_event_ok: false,
        };
        assert_eq!(no_post.missing(), Some("PostEvent"));

        let all = PermissionsStatus {
            accessibility_ok: true,
            post_event_ok: true,
        };
        assert_eq!(all.missing(), None);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn non_macos_reports_nothing_granted() {
        assert_eq!(check_permissions().missing(), Some("Accessibility"));
    }
}
