//! Marker written into events posted by the remouse tools.
//!
//! Injected events carry [`REMOUSE_TAG`] in the `EventSourceUserData` field
//! so event taps can tell synthesized input from hardware input.

/// 'rmse' in ASCII bytes: 0x72 0x6d 0x73 0x65 -> 1919775589
pub const REMOUSE_TAG: i64 = 0x726d_7365;
