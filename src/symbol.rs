//! The polymorphism seam over symbol width (§9 of the design notes): one
//! algorithm, two symbol types. `Symbol` captures everything the fuzzy
//! extractor needs from a symbol — bitwise masking, a zero test, and a
//! big-endian wire form for PBKDF2 — so [`crate::FuzzyExtractor`] is written
//! once against the trait and instantiated at `u8` (the byte variant) or
//! `u32` (the 32-bit-word variant).
//!
//! The big-endian choice is part of the wire contract (spec §9) and must
//! not be changed: PBKDF2 always hashes a byte stream, so `u32`-symbol
//! buffers are serialized big-endian before hashing and digests are
//! deserialized big-endian back into symbols.

use rand_core::CryptoRngCore;

use crate::Error;

/// A symbol of the noisy input the fuzzy extractor operates over.
///
/// Implemented for `u8` (byte-wide symbols) and `u32` (32-bit-word-wide
/// symbols). Not intended to be implemented outside this crate.
pub trait Symbol: Copy + Clone + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Width of one symbol on the wire, in bytes (1 for `u8`, 4 for `u32`).
    const WIDTH: usize;

    /// Bits per symbol, used by the helper-count formula (§4.2): `n = B * w_bits`.
    const BITS: u32;

    /// Bitwise AND, used to compute the masked vector `value[j] AND mask[i][j]`.
    #[must_use]
    fn and(self, other: Self) -> Self;

    /// Bitwise XOR, used to lock/unlock `key_pad` under the PBKDF2 digest.
    #[must_use]
    fn xor(self, other: Self) -> Self;

    /// True if every bit of this symbol is zero; used by the tail-zero authenticator check.
    #[must_use]
    fn is_zero(self) -> bool;

    /// Appends this symbol's big-endian byte representation to `out`.
    fn write_be(self, out: &mut Vec<u8>);

    /// Parses one symbol from the front of `bytes`, big-endian.
    ///
    /// # Panics
    /// Panics if `bytes.len() < Self::WIDTH`; callers always slice a buffer
    /// whose length is an exact multiple of `Self::WIDTH` beforehand.
    fn from_be_bytes(bytes: &[u8]) -> Self;

    /// Draws one uniformly random symbol from `rng`.
    ///
    /// # Errors
    /// Propagates the RNG's failure as [`Error::EntropyFailure`].
    fn random(rng: &mut impl CryptoRngCore) -> Result<Self, Error>;
}

impl Symbol for u8 {
    const WIDTH: usize = 1;
    const BITS: u32 = 8;

    fn and(self, other: Self) -> Self { self & other }

    fn xor(self, other: Self) -> Self { self ^ other }

    fn is_zero(self) -> bool { self == 0 }

    fn write_be(self, out: &mut Vec<u8>) { out.push(self); }

    fn from_be_bytes(bytes: &[u8]) -> Self { bytes[0] }

    fn random(rng: &mut impl CryptoRngCore) -> Result<Self, Error> {
        let mut buf = [0u8; 1];
        rng.try_fill_bytes(&mut buf)?;
        Ok(buf[0])
    }
}

impl Symbol for u32 {
    const WIDTH: usize = 4;
    const BITS: u32 = 32;

    fn and(self, other: Self) -> Self { self & other }

    fn xor(self, other: Self) -> Self { self ^ other }

    fn is_zero(self) -> bool { self == 0 }

    fn write_be(self, out: &mut Vec<u8>) { out.extend_from_slice(&self.to_be_bytes()); }

    fn from_be_bytes(bytes: &[u8]) -> Self {
        u32::from_be_bytes(bytes[..4].try_into().expect("slice of 4 bytes"))
    }

    fn random(rng: &mut impl CryptoRngCore) -> Result<Self, Error> {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }
}

/// Serializes a slice of symbols to a big-endian byte buffer, as needed
/// before every PBKDF2 call (spec §9: "big-endian serialization of
/// 32-bit-symbol buffers before hashing").
pub(crate) fn to_be_bytes<T: Symbol>(symbols: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(symbols.len() * T::WIDTH);
    for &s in symbols {
        s.write_be(&mut out);
    }
    out
}

/// Deserializes `count` big-endian symbols from the front of `bytes`.
///
/// # Panics
/// Panics if `bytes.len() < count * T::WIDTH`; only called here on PBKDF2
/// output sized by this crate's own `dk_len` computation.
pub(crate) fn from_be_bytes<T: Symbol>(bytes: &[u8], count: usize) -> Vec<T> {
    bytes.chunks_exact(T::WIDTH).take(count).map(T::from_be_bytes).collect()
}

/// Fills a fresh `Vec<T>` of length `len` with uniformly random symbols.
pub(crate) fn random_vec<T: Symbol>(rng: &mut impl CryptoRngCore, len: usize) -> Result<Vec<T>, Error> {
    (0..len).map(|_| T::random(rng)).collect()
}
