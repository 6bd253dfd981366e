//! Minutia Codec — symmetric pack/unpack of a fingerprint minutia to/from a
//! single 32-bit word, plus hex encoding (spec §4.1).
//!
//! Bit layout (MSB→LSB): `type` (2 bits) | `x` (11 bits) | `y` (11 bits) |
//! `angle` (8 bits, quantized in steps of `π/128`). Out-of-range inputs are
//! masked, never rejected — the codec has no error path (spec §4.1
//! "Failures: None").

use std::f64::consts::PI;

const BITMASK_11: u32 = 0b111_1111_1111;
const BITMASK_2: u32 = 0b11;
const BITMASK_8: u32 = 0xff;

/// The kind of fingerprint feature a [`Minutia`] describes.
///
/// Only `Unknown` is meaningful to this codec (spec §3: "at least the value
/// *Unknown* = 0 is required; further discriminants are caller-assigned").
/// `Ending`, `Bifurcation`, and `Other` are provided as the natural
/// caller-assigned values for a 2-bit enumerant and decode losslessly the
/// same as any other value in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MinutiaType {
    /// No classification assigned.
    #[default]
    Unknown = 0,
    /// A ridge ending.
    Ending = 1,
    /// A ridge bifurcation.
    Bifurcation = 2,
    /// Any other caller-assigned feature kind.
    Other = 3,
}

impl From<u32> for MinutiaType {
    /// Lossless for any input; only the low 2 bits are consulted.
    fn from(word: u32) -> Self {
        match word & BITMASK_2 {
            0 => Self::Unknown,
            1 => Self::Ending,
            2 => Self::Bifurcation,
            _ => Self::Other,
        }
    }
}

/// A single fingerprint feature point: type, coordinates, and orientation.
///
/// `x` and `y` are truncated to 11 bits (`[0, 2047]`) and `angle` is
/// quantized to 256 steps of `π/128` on encode; out-of-domain values are
/// masked rather than rejected (spec §3 invariant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minutia {
    /// Feature classification.
    pub minutia_type: MinutiaType,
    /// X coordinate, 11 bits.
    pub x: u32,
    /// Y coordinate, 11 bits.
    pub y: u32,
    /// Orientation in radians, nominally `[0, 2π)`.
    pub angle: f64,
}

/// Packs a minutia into its 32-bit word representation (spec §4.1 encode rule).
///
/// The `- 1` bias on the angle field is intentional: it is preserved exactly
/// to stay bit-for-bit compatible with existing helper data, even though it
/// makes the decoded angle range begin just above zero (see
/// [`unpack`]'s doc comment).
#[must_use]
pub fn pack(m: &Minutia) -> u32 {
    let type_bits = (m.minutia_type as u32) & BITMASK_2;
    let x_bits = (m.x & BITMASK_11) << 19;
    let y_bits = (m.y & BITMASK_11) << 8;
    let angle_bits = encode_angle(m.angle);
    (type_bits << 30) | x_bits | y_bits | angle_bits
}

/// Unpacks a 32-bit word into a minutia (spec §4.1 decode rule).
///
/// `type`, `x`, and `y` round-trip exactly. `angle` is exact only up to the
/// `π/128` quantum: the original encoder's `- 1` bias is asymmetric around
/// zero (an angle just below `π/128` decodes to the maximum quantum, not to
/// zero), which is preserved here for wire compatibility and flagged as
/// possibly unintended (spec §9).
#[must_use]
pub fn unpack(word: u32) -> Minutia {
    Minutia {
        minutia_type: MinutiaType::from(word >> 30),
        x: (word >> 19) & BITMASK_11,
        y: (word >> 8) & BITMASK_11,
        angle: decode_angle(word),
    }
}

/// Hex-encodes a packed word as exactly 8 lowercase hex characters.
#[must_use]
pub fn hex(word: u32) -> String {
    hex::encode(word.to_be_bytes())
}

/// Hex-encodes a sequence of packed words by concatenating their big-endian
/// bytes, matching how a caller would serialize an entire minutiae list for
/// the fuzzy extractor's `value` input.
#[must_use]
pub fn hex_sequence(words: &[u32]) -> String {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for &w in words {
        bytes.extend_from_slice(&w.to_be_bytes());
    }
    hex::encode(bytes)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // biased is masked to a byte below, wrapping is the point
fn encode_angle(angle: f64) -> u32 {
    let quantum = (angle * 128.0 / PI).round() as i64;
    let biased = quantum - 1;
    (biased as u32) & BITMASK_8
}

fn decode_angle(word: u32) -> f64 {
    f64::from((word & BITMASK_8) + 1) * PI / 128.0
}
