// src/uuid_codec.rs
//! Lossless shortening of UUIDs
//!
//! A UUID is shortened by parsing its 32 hex digits as one base-16 integer. Because the width is
//! always 128 bits, leading zeros stripped by the integer are restored on expansion by padding the
//! hex back to 32 digits. Version and variant bits are ordinary payload.

use num_bigint::BigUint;
use uuid::Uuid;

use crate::{
    base62,
    error::{DecodeError, DecodeReason, EncodeError, EncodeReason},
    id::ShortId,
};

/// Number of hex digits in a UUID without hyphens.
const HEX_LEN: usize = 32;

/// Hex digits per hyphen-separated group of the canonical UUID form.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Shorten a UUID into a base62 short ID of at most 22 symbols.
///
/// # Example
/// ```
/// use shortuuid::{Uuid, expand_uuid, shorten_uuid};
///
/// let uuid = Uuid::parse_str("4890586e-32a5-4f9c-a000-2a2bb68eb1ce")?;
/// let short = shorten_uuid(uuid)?;
/// assert_eq!(short, "2CvPdpytrcURpSLoPxYb30");
/// assert_eq!(expand_uuid(&short)?, uuid);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an [`EncodeError`] if the UUID cannot be rendered as 32 hex digits, which does not
/// happen for any value of [`Uuid`].
pub fn shorten_uuid(uuid: Uuid) -> Result<ShortId, EncodeError> {
    shorten_uuid_str(&uuid.hyphenated().to_string())
}

/// Shorten a UUID given in textual form.
///
/// Hyphens are ignored and hex digits may be of either case, so the result is identical to
/// [`shorten_uuid`] of the parsed value.
///
/// # Errors
///
/// Returns an [`EncodeError`] if `input` is empty, is not 32 characters long once hyphens are
/// removed, or contains anything other than hex digits and hyphens.
pub fn shorten_uuid_str(input: &str) -> Result<ShortId, EncodeError> {
    if input.is_empty() {
        return Err(EncodeError::new(input, EncodeReason::EmptyUuid));
    }

    let hex = input.replace('-', "");
    if hex.len() != HEX_LEN {
        return Err(EncodeError::new(
            input,
            EncodeReason::InvalidUuidLength(hex.len()),
        ));
    }

    // `parse_bytes` tolerates `_` separators, so validate the digits ourselves.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EncodeError::new(input, EncodeReason::NonHexCharacters));
    }

    let n = BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| EncodeError::new(input, EncodeReason::NonHexCharacters))?;

    let short_id = base62::int_to_short(&n);
    tracing::trace!(uuid = input, %short_id, "shortened UUID");
    Ok(short_id)
}

/// Expand a short ID produced by [`shorten_uuid`] back into the UUID.
///
/// # Errors
///
/// Returns a [`DecodeError`] if `short_id` contains a symbol outside the alphabet, decodes to a
/// value wider than 128 bits, or does not form a valid UUID.
pub fn expand_uuid(short_id: &str) -> Result<Uuid, DecodeError> {
    let n = base62::short_to_int(short_id)?;

    let hex = format!("{:0>width$}", n.to_str_radix(16), width = HEX_LEN);
    if hex.len() != HEX_LEN {
        return Err(DecodeError::new(
            short_id,
            DecodeReason::InvalidLength(hex.len()),
        ));
    }

    let hyphenated = hyphenate(&hex)
        .ok_or_else(|| DecodeError::new(short_id, DecodeReason::InvalidLength(hex.len())))?;

    let uuid = Uuid::parse_str(&hyphenated)
        .map_err(|e| DecodeError::new(short_id, DecodeReason::InvalidUuid(e)))?;
    tracing::trace!(short_id, %uuid, "expanded UUID");
    Ok(uuid)
}

/// Split 32 hex digits into the 8-4-4-4-12 hyphenated form.
fn hyphenate(hex: &str) -> Option<String> {
    let mut rest = hex;
    let mut groups = Vec::with_capacity(GROUPS.len());
    for len in GROUPS {
        let (group, tail) = rest.split_at_checked(len)?;
        groups.push(group);
        rest = tail;
    }

    rest.is_empty().then(|| groups.join("-"))
}
