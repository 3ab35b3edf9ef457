// src/base62.rs
//! Conversion between arbitrary-precision integers and base62 short IDs
//!
//! Both front ends ([`crate::text`] and [`crate::uuid_codec`]) funnel through this module. The
//! integer zero is always rendered as the single zero symbol, so an encoded value is never empty.
//! Leading zero bytes of whatever the integer was built from do not survive the trip; callers that
//! know the original width must restore them.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    alphabet::{self, BASE},
    error::{DecodeError, DecodeReason},
    id::ShortId,
};

/// Render `n` in base62, most significant digit first.
///
/// # Example
/// ```
/// use shortuuid::{BigUint, int_to_short};
///
/// assert_eq!(int_to_short(&BigUint::from(0_u32)), "0");
/// assert_eq!(int_to_short(&BigUint::from(61_u32)), "z");
/// assert_eq!(int_to_short(&BigUint::from(62_u32)), "10");
/// ```
pub fn int_to_short(n: &BigUint) -> ShortId {
    if n.is_zero() {
        return ShortId(alphabet::ZERO.to_string());
    }

    let encoded = n
        .to_radix_be(BASE)
        .into_iter()
        .map(|digit| {
            alphabet::symbol(digit).expect("Radix digits are guarenteed to be within alphabet.")
        })
        .collect::<String>();

    ShortId(encoded)
}

/// Parse a base62 short ID back into an integer.
///
/// Symbols are consumed left to right, most significant first. An empty short ID is zero.
///
/// # Errors
///
/// Returns [`DecodeReason::InvalidCharacter`] for the first symbol outside the alphabet, along
/// with its character position.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "BigUint arithmetic cannot overflow."
)]
pub fn short_to_int(short_id: &str) -> Result<BigUint, DecodeError> {
    short_id
        .chars()
        .enumerate()
        .try_fold(BigUint::zero(), |acc, (position, character)| {
            let digit = alphabet::index_of(character).ok_or_else(|| {
                DecodeError::new(
                    short_id,
                    DecodeReason::InvalidCharacter {
                        character,
                        position,
                    },
                )
            })?;

            Ok(acc * BASE + u32::from(digit))
        })
}
