//! Public helper data (spec §3) and the pieces of the construction shared
//! between `Gen` and `Rep`: the helper-count formula (spec §4.2) and the
//! PBKDF2-digest-then-XOR step.

use hmac::Hmac;

use crate::symbol::{from_be_bytes, to_be_bytes, Symbol};

/// Public side information produced by `Gen`, consumed by `Rep`.
///
/// `ciphers`, `masks`, and `nonces` always share the same length `L`
/// (spec §3 invariant); for each index `i`, `ciphers[i]` has `B + s`
/// symbols, `masks[i]` has `B` symbols, and `nonces[i]` has `nonce_length`
/// bytes — this crate fixes `nonce_length` to mean bytes for both symbol
/// widths, regardless of `T`.
///
/// Helper data is assumed public (spec §1 non-goals: no confidentiality of
/// helper data) — this type derives `Clone` and `Debug` freely, unlike
/// [`crate::Key`], which does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helpers<T: Symbol> {
    pub(crate) ciphers: Vec<Vec<T>>,
    pub(crate) masks: Vec<Vec<T>>,
    pub(crate) nonces: Vec<Vec<u8>>,
}

impl<T: Symbol> Helpers<T> {
    /// Number of helper entries `L`.
    #[must_use]
    pub fn len(&self) -> usize { self.ciphers.len() }

    /// True if this helper set carries no entries (only possible for a
    /// degenerate `reproduce_error` that rounds `L` down to zero).
    #[must_use]
    pub fn is_empty(&self) -> bool { self.ciphers.is_empty() }
}

/// Computes the helper count `L` from the construction's parameters (spec
/// §4.2):
///
/// ```text
/// n = B * w_bits
/// c = t / ln(n)
/// L = round( n^c * log2(2 / epsilon) )
/// ```
///
/// This formula must be reproduced exactly — it is what trades storage and
/// `Rep` time for reproduction probability.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)] // L is small; precision loss here doesn't change the rounded result
pub(crate) fn num_helpers(block_length: usize, w_bits: u32, hamming_error: u32, reproduce_error: f64) -> usize {
    let n = (block_length as f64) * f64::from(w_bits);
    let c = f64::from(hamming_error) / n.ln();
    (n.powf(c) * (2.0 / reproduce_error).log2()).round() as usize
}

/// Computes `digest[i]` for one helper index: PBKDF2 over the big-endian
/// serialization of `vector` (the masked input) salted with `nonce`, one
/// iteration, expanded to `dk_len` symbols and deserialized back
/// big-endian (spec §4.2 step e, and the `Rep` recomputation of the same
/// digest).
pub(crate) fn digest<T: Symbol, H>(vector: &[T], nonce: &[u8], dk_len_symbols: usize) -> Vec<T>
where
    H: digest::Digest + Clone + hmac::EagerHash,
    Hmac<H>: hmac::Mac + digest::KeyInit + Clone,
{
    let vector_bytes = to_be_bytes(vector);
    let mut out = vec![0u8; dk_len_symbols * T::WIDTH];
    pbkdf2::pbkdf2::<Hmac<H>>(&vector_bytes, nonce, 1, &mut out)
        .expect("dk_len is always small relative to the PRF's output limit");
    from_be_bytes(&out, dk_len_symbols)
}
