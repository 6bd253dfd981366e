//! The fuzzy extractor construction (spec §4.2): `Gen(value) -> (key, helper)`
//! and `Rep(value', helper) -> key`, generic over the symbol width `T`
//! ([`Symbol`]) and the hash used as PBKDF2's PRF (`H`, default `Sha256`).

use std::marker::PhantomData;

use hmac::Hmac;
use rand_core::CryptoRngCore;
#[cfg(feature = "default-rng")]
use rand_core::OsRng;
use sha2::Sha256;

use crate::helpers::{self, Helpers};
use crate::symbol::{self, Symbol};
use crate::{Error, Key};

/// Default security length `s`: two trailing zero-pad symbols as the
/// tail-zero authenticator.
pub const DEFAULT_SECURITY_LENGTH: usize = 2;
/// Default nonce length, in bytes, for both symbol widths.
pub const DEFAULT_NONCE_LENGTH: usize = 16;
/// Default upper bound on `Rep`'s failure probability given a sufficiently similar input.
pub const DEFAULT_REPRODUCE_ERROR: f64 = 0.001;

/// A fuzzy extractor instance over symbols of type `T`, using hash `H` as
/// PBKDF2's PRF. Immutable after construction (spec §5): `gen`/`rep` take
/// `&self` and may be called concurrently from multiple threads.
///
/// # Examples
/// ```
/// use fuzzy_extractor::FuzzyExtractor;
///
/// let fe = FuzzyExtractor::<u8>::new_default(16, 8);
/// let (key, helper) = fe.gen("00112233445566778899aabbccddeeff").unwrap();
/// let key2 = fe.rep("00112233445566778899aabbccddeeff", &helper).unwrap();
/// assert_eq!(key, key2);
/// ```
pub struct FuzzyExtractor<T: Symbol, H = Sha256> {
    security_length: usize,
    nonce_length: usize,
    block_length: usize,
    hamming_error: u32,
    reproduce_error: f64,
    num_helpers: usize,
    _symbol: PhantomData<T>,
    _hash: PhantomData<H>,
}

impl<T, H> FuzzyExtractor<T, H>
where
    T: Symbol,
    H: digest::Digest + Clone + hmac::EagerHash,
    Hmac<H>: hmac::Mac + digest::KeyInit + Clone,
{
    /// Builds a fuzzy extractor with explicit parameters (spec §4.2).
    ///
    /// `block_length` is the required symbol count of every `value` passed
    /// to `gen`/`rep`. `hamming_error` is the target bit-position
    /// resilience `t`. `reproduce_error` is the desired upper bound `ε` on
    /// `rep` failing given an input within `t` bits. `security_length` is
    /// the tail zero-pad symbol count `s`. `nonce_length` is the nonce
    /// length in bytes (applies identically to both symbol widths — see
    /// the nonce-length resolution in `SPEC_FULL.md`).
    #[must_use]
    pub fn new(
        block_length: usize, hamming_error: u32, reproduce_error: f64, security_length: usize,
        nonce_length: usize,
    ) -> Self {
        let num_helpers = helpers::num_helpers(block_length, T::BITS, hamming_error, reproduce_error);
        Self {
            security_length,
            nonce_length,
            block_length,
            hamming_error,
            reproduce_error,
            num_helpers,
            _symbol: PhantomData,
            _hash: PhantomData,
        }
    }

    /// Number of helper entries `L` this instance computed from its parameters.
    #[must_use]
    pub fn num_helpers(&self) -> usize { self.num_helpers }

    /// Required input length, in symbols (`B`).
    #[must_use]
    pub fn block_length(&self) -> usize { self.block_length }

    /// Target bit-position resilience `t`.
    #[must_use]
    pub fn hamming_error(&self) -> u32 { self.hamming_error }

    /// Desired upper bound `ε` on `rep` failure probability.
    #[must_use]
    pub fn reproduce_error(&self) -> f64 { self.reproduce_error }

    /// Tail zero-pad symbol count `s`.
    #[must_use]
    pub fn security_length(&self) -> usize { self.security_length }

    /// Nonce length, in bytes.
    #[must_use]
    pub fn nonce_length(&self) -> usize { self.nonce_length }

    /// Required input length, in hex characters, for `value`/`value'`.
    #[must_use]
    pub fn expected_hex_len(&self) -> usize { self.block_length * T::WIDTH * 2 }

    /// `Gen(value) -> (key, helper)` using the OS random number generator.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHex`] if `value` is not valid hex,
    /// [`Error::InvalidLength`] if its decoded length does not match
    /// `block_length` symbols, or [`Error::EntropyFailure`] if the RNG fails.
    #[cfg(feature = "default-rng")]
    pub fn gen(&self, value: &str) -> Result<(Key, Helpers<T>), Error> { self.gen_with_rng(value, &mut OsRng) }

    /// `Gen(value) -> (key, helper)` using an injected random number
    /// generator (spec §9: "inject via a capability rather than a
    /// process-global, to support deterministic testing").
    ///
    /// # Errors
    /// Same as [`Self::gen`].
    pub fn gen_with_rng(&self, value: &str, rng: &mut impl CryptoRngCore) -> Result<(Key, Helpers<T>), Error> {
        let value = self.decode_value(value)?;

        let key: Vec<T> = symbol::random_vec(rng, self.block_length)?;
        let mut key_pad = key.clone();
        key_pad.extend(std::iter::repeat(T::default()).take(self.security_length));

        let mut ciphers = Vec::with_capacity(self.num_helpers);
        let mut masks = Vec::with_capacity(self.num_helpers);
        let mut nonces = Vec::with_capacity(self.num_helpers);

        for _ in 0..self.num_helpers {
            let mut nonce = vec![0u8; self.nonce_length];
            rng.try_fill_bytes(&mut nonce)?;
            let mask: Vec<T> = symbol::random_vec(rng, self.block_length)?;

            let vector: Vec<T> = value.iter().zip(&mask).map(|(&v, &m)| v.and(m)).collect();
            let digest = helpers::digest::<T, H>(&vector, &nonce, self.block_length + self.security_length);
            let cipher: Vec<T> = digest.iter().zip(&key_pad).map(|(&d, &k)| d.xor(k)).collect();

            ciphers.push(cipher);
            masks.push(mask);
            nonces.push(nonce);
        }

        let key_hex = hex::encode(symbol::to_be_bytes(&key));
        Ok((Key::new(key_hex), Helpers { ciphers, masks, nonces }))
    }

    /// `Rep(value', helper) -> key`: tries every helper in insertion order
    /// and returns the key from the first zero-tail match.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHex`]/[`Error::InvalidLength`] as in
    /// [`Self::gen`], or [`Error::UnableToReproduce`] if no helper's
    /// tail-zero authenticator check passes.
    pub fn rep(&self, value: &str, helper: &Helpers<T>) -> Result<Key, Error> {
        let value = self.decode_value(value)?;

        for i in 0..helper.len() {
            let vector: Vec<T> = helper.masks[i].iter().zip(&value).map(|(&m, &v)| m.and(v)).collect();
            let digest = helpers::digest::<T, H>(&vector, &helper.nonces[i], self.block_length + self.security_length);
            let plain: Vec<T> = digest.iter().zip(&helper.ciphers[i]).map(|(&d, &c)| d.xor(c)).collect();

            if plain[self.block_length..].iter().all(|s| s.is_zero()) {
                let key_hex = hex::encode(symbol::to_be_bytes(&plain[..self.block_length]));
                return Ok(Key::new(key_hex));
            }
        }

        Err(Error::UnableToReproduce)
    }

    fn decode_value(&self, value: &str) -> Result<Vec<T>, Error> {
        let bytes = hex::decode(value)?;
        let expected = self.block_length * T::WIDTH;
        if bytes.len() != expected {
            return Err(Error::InvalidLength { expected, actual: bytes.len() });
        }
        Ok(symbol::from_be_bytes(&bytes, self.block_length))
    }
}

impl<T: Symbol> FuzzyExtractor<T, Sha256> {
    /// Builds a fuzzy extractor with the spec's defaults (spec §4.2): `s = 2`,
    /// `nonce_length = 16` bytes, `ε = 0.001`, hash = SHA-256.
    #[must_use]
    pub fn new_default(block_length: usize, hamming_error: u32) -> Self {
        Self::new(
            block_length,
            hamming_error,
            DEFAULT_REPRODUCE_ERROR,
            DEFAULT_SECURITY_LENGTH,
            DEFAULT_NONCE_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::FuzzyExtractor;

    /// S2: byte extractor identity, B=16, t=8, defaults otherwise.
    #[test]
    fn s2_byte_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let value = "00112233445566778899aabbccddeeff";
        let (key, helper) = fe.gen_with_rng(value, &mut rng).unwrap();
        let key2 = fe.rep(value, &helper).unwrap();
        assert_eq!(key, key2);
    }

    /// S3: byte extractor tolerant to an 8-bit-position difference.
    #[test]
    fn s3_byte_tolerant() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let key2 = fe.rep("00112223445566778899abbbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }

    /// S4: word extractor identity, B=4, t=2, defaults otherwise.
    #[test]
    fn s4_word_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let fe = FuzzyExtractor::<u32>::new_default(4, 2);
        let value = "00112233445566778899aabbccddeeff";
        let (key, helper) = fe.gen_with_rng(value, &mut rng).unwrap();
        let key2 = fe.rep(value, &helper).unwrap();
        assert_eq!(key, key2);
    }

    /// S5: word extractor tolerant to the same nibble difference as S3.
    #[test]
    fn s5_word_tolerant() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let fe = FuzzyExtractor::<u32>::new_default(4, 2);
        let (key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let key2 = fe.rep("00112223445566778899abbbccddeeff", &helper).unwrap();
        assert_eq!(key, key2);
    }

    /// S6: an independent random input fails to reproduce, overwhelmingly.
    #[test]
    fn s6_rejects_unrelated_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let (_key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let result = fe.rep("ffeeddccbbaa99887766554433221100", &helper);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_length_input() {
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let err = fe.gen_with_rng("aabb", &mut rng).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidLength { expected: 16, actual: 2 }));
    }

    #[test]
    fn rejects_invalid_hex() {
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let err = fe.gen_with_rng("not-hex-at-all-zz", &mut rng).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidHex(_)));
    }

    #[test]
    fn helper_structure_matches_spec() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let fe = FuzzyExtractor::<u8>::new_default(16, 8);
        let (_key, helper) = fe.gen_with_rng("00112233445566778899aabbccddeeff", &mut rng).unwrap();
        let l = fe.num_helpers();
        assert_eq!(helper.ciphers.len(), l);
        assert_eq!(helper.masks.len(), l);
        assert_eq!(helper.nonces.len(), l);
        for i in 0..l {
            assert_eq!(helper.ciphers[i].len(), 16 + 2);
            assert_eq!(helper.masks[i].len(), 16);
            assert_eq!(helper.nonces[i].len(), super::DEFAULT_NONCE_LENGTH);
        }
    }
}
