#![deny(clippy::pedantic, missing_docs, unsafe_code)]
#![deny(absolute_paths_not_starting_with_crate, dead_code)]
#![deny(elided_lifetimes_in_paths, explicit_outlives_requirements, keyword_idents)]
#![deny(let_underscore_drop, macro_use_extern_crate, meta_variable_misuse, missing_abi)]
#![deny(non_ascii_idents, rust_2021_incompatible_closure_captures)]
#![deny(rust_2021_incompatible_or_patterns, rust_2021_prefixes_incompatible_syntax)]
#![deny(rust_2021_prelude_collisions, single_use_lifetimes, trivial_casts)]
#![deny(trivial_numeric_casts, unreachable_pub, unsafe_op_in_unsafe_fn, unstable_features)]
#![deny(unused_extern_crates, unused_import_braces, unused_lifetimes, unused_macro_rules)]
#![deny(unused_qualifications, variant_size_differences)]
//
//! A fuzzy extractor: derives a stable, uniformly random [`Key`] from a
//! noisy input (for example a biometric feature vector) such that the same
//! key can later be reproduced from any sufficiently similar input,
//! without ever storing the input itself.
//!
//! Two pieces live here:
//!
//! - [`FuzzyExtractor`] — `Gen(value) -> (key, helper)` and
//!   `Rep(value', helper) -> key`, generic over the symbol width of the
//!   noisy input (byte-wide `FuzzyExtractor<u8>` or 32-bit-word-wide
//!   `FuzzyExtractor<u32>`).
//! - [`codec`] — a fixed-layout packed codec for fingerprint minutia
//!   records, upstream of the extractor: a caller packs minutiae into a
//!   hex string with [`codec::hex_sequence`] and feeds that string to
//!   [`FuzzyExtractor::gen`]/[`FuzzyExtractor::rep`].
//!
//! Out of scope: the command-line entry point, image loading, the
//! minutiae detection pipeline, and the Schnorr signature library that
//! might consume the derived key downstream. This crate only implements
//! the two pieces above; see `SPEC_FULL.md` in the repository root for the
//! full design rationale.
//!
//! # Examples
//!
//! ```
//! use fuzzy_extractor::FuzzyExtractor;
//!
//! let fe = FuzzyExtractor::<u8>::new_default(16, 8);
//! let (key, helper) = fe.gen("00112233445566778899aabbccddeeff").unwrap();
//!
//! // A sample differing in a couple of nibbles (at most `t` bit positions) still reproduces:
//! let key2 = fe.rep("00112223445566778899abbbccddeeff", &helper).unwrap();
//! assert_eq!(key, key2);
//! ```

pub mod codec;
mod error;
mod extractor;
mod helpers;
mod key;
pub mod symbol;

pub use error::Error;
pub use extractor::{FuzzyExtractor, DEFAULT_NONCE_LENGTH, DEFAULT_REPRODUCE_ERROR, DEFAULT_SECURITY_LENGTH};
pub use helpers::Helpers;
pub use key::Key;
pub use symbol::Symbol;

/// The `rand_core` types are re-exported so that users of this crate do not
/// have to worry about pinning an exact matching `rand_core` version
/// themselves.
pub use rand_core::{CryptoRngCore, Error as RngError};
