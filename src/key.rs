//! The secret key produced by `Gen` and reproduced by `Rep`.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A hex-encoded key of `B` symbols of random material (spec §3).
///
/// Produced fresh on each `gen`, reproduced by `rep`, never persisted
/// alongside helper data. Deliberately opaque: `Debug` never prints the
/// hex contents (mirroring the design note that key material must never be
/// logged interleaved with helper data), and equality is constant-time to
/// avoid a timing side-channel when a caller compares a reproduced key
/// against a reference.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key(String);

impl Key {
    pub(crate) fn new(hex: String) -> Self { Self(hex) }

    /// The lowercase hex encoding of the key's symbols.
    #[must_use]
    pub fn as_hex(&self) -> &str { &self.0 }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool { bool::from(self.0.as_bytes().ct_eq(other.0.as_bytes())) }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Key(<redacted>)") }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("<redacted>") }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn equal_keys_compare_equal() {
        let a = Key::new("deadbeef".to_string());
        let b = Key::new("deadbeef".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn debug_never_prints_hex() {
        let k = Key::new("deadbeef".to_string());
        assert!(!format!("{k:?}").contains("deadbeef"));
    }
}
