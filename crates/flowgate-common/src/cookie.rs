//! Opaque flow correlation handle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier correlating packets and inspection events to one flow.
///
/// The value is assigned by the capture layer (a 5-tuple digest or a
/// kernel-provided handle) and is never interpreted here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct FlowCookie(u64);

impl FlowCookie {
    /// Wrap a raw handle
    #[inline(always)]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle value
    #[inline(always)]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for FlowCookie {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FlowCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_roundtrip() {
        let cookie = FlowCookie::new(0xdead_beef);
        assert_eq!(cookie.raw(), 0xdead_beef);
        assert_eq!(FlowCookie::from(0xdead_beef), cookie);
    }

    #[test]
    fn test_cookie_display_is_hex() {
        assert_eq!(FlowCookie::new(0xbeef).to_string(), "0xbeef");
    }
}
