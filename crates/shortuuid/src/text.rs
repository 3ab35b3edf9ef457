// src/text.rs
//! Shortening of arbitrary strings and byte strings
//!
//! The raw bytes are read as one big-endian integer. Leading zero bytes carry no magnitude and are
//! dropped, so only inputs whose first byte is non-zero survive a round-trip unchanged.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    base62,
    error::{DecodeError, DecodeReason, EncodeError, EncodeReason},
    id::ShortId,
};

/// Shorten a string into a base62 short ID.
///
/// # Example
/// ```
/// use shortuuid::{expand, shorten};
///
/// let short = shorten("Hello, World!")?;
/// assert_eq!(short, "1wJfrzvdbtXUOlUjUf");
/// assert_eq!(expand(&short)?, "Hello, World!");
/// # Ok::<(), shortuuid::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`EncodeReason::EmptyInput`] if `input` is empty.
pub fn shorten(input: &str) -> Result<ShortId, EncodeError> {
    shorten_bytes(input.as_bytes())
}

/// Shorten a raw byte string into a base62 short ID.
///
/// A byte string made only of zero bytes is valid and shortens to `"0"`.
///
/// # Errors
///
/// Returns [`EncodeReason::EmptyInput`] if `input` is empty.
pub fn shorten_bytes(input: &[u8]) -> Result<ShortId, EncodeError> {
    if input.is_empty() {
        return Err(EncodeError::new(String::new(), EncodeReason::EmptyInput));
    }

    let short_id = base62::int_to_short(&BigUint::from_bytes_be(input));
    tracing::trace!(input_len = input.len(), %short_id, "shortened bytes");
    Ok(short_id)
}

/// Expand a short ID produced by [`shorten`] back into the original string.
///
/// An empty short ID expands to an empty string, as does `"0"`.
///
/// # Errors
///
/// Returns [`DecodeReason::InvalidCharacter`] if `short_id` contains a symbol outside the
/// alphabet, or [`DecodeReason::InvalidUtf8`] if the decoded bytes are not valid UTF-8.
pub fn expand(short_id: &str) -> Result<String, DecodeError> {
    let bytes = expand_bytes(short_id)?;
    String::from_utf8(bytes)
        .map_err(|e| DecodeError::new(short_id, DecodeReason::InvalidUtf8(e.utf8_error())))
}

/// Expand a short ID produced by [`shorten_bytes`] back into its minimal big-endian bytes.
///
/// # Errors
///
/// Returns [`DecodeReason::InvalidCharacter`] if `short_id` contains a symbol outside the
/// alphabet.
pub fn expand_bytes(short_id: &str) -> Result<Vec<u8>, DecodeError> {
    let n = base62::short_to_int(short_id)?;

    // `to_bytes_be` renders zero as a single zero byte.
    let bytes = if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    };
    tracing::trace!(short_id, output_len = bytes.len(), "expanded bytes");
    Ok(bytes)
}
