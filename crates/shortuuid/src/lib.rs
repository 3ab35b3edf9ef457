//! Reversible, URL-safe base62 short IDs for strings and UUIDs.
//!
//! Two front ends share one big-integer conversion engine:
//! * [`shorten`] / [`expand`] treat a string's raw bytes as a big-endian integer. Leading zero
//!   bytes are lost, so only strings whose first byte is non-zero round-trip.
//! * [`shorten_uuid`] / [`expand_uuid`] treat a UUID's 32 hex digits as one integer and are
//!   lossless for every UUID.
//!
//! The alphabet is `0-9`, `A-Z`, `a-z`, in that order.
//!
//! # Example
//!
//! ```
//! use shortuuid::{ShortId, Uuid, expand_uuid, shorten_uuid};
//!
//! let uuid = Uuid::parse_str("53a8d1b9-4eca-4888-9b59-8fa91497857b")?;
//! let short: ShortId = shorten_uuid(uuid)?;
//! assert_eq!(short, "2XrVqpuNYMfp5OSuawGnL1");
//! assert_eq!(expand_uuid(&short)?, uuid);
//!
//! let random = ShortId::generate();
//! println!("Generated ID: {}", random);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alphabet;
pub mod base62;
pub mod distribution;
pub mod error;
pub mod id;
pub mod text;
pub mod uuid_codec;

// Re-export main types for convenience
pub use base62::{int_to_short, short_to_int};
pub use distribution::ShortUuidDist;
pub use error::{DecodeError, DecodeReason, EncodeError, EncodeReason, Error, Result};
pub use num_bigint::BigUint;
pub use text::{expand, expand_bytes, shorten, shorten_bytes};
pub use uuid::Uuid;
pub use uuid_codec::{expand_uuid, shorten_uuid, shorten_uuid_str};

pub use crate::id::ShortId;

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_mixed_directions_with_question_mark() -> Result<()> {
        let short = shorten("mixed")?;
        assert_eq!(expand(&short)?, "mixed");

        let err = (|| -> Result<String> { Ok(expand("mi#ed")?) })().expect_err("invalid");
        assert!(matches!(err, Error::Decode(_)));
        Ok(())
    }

    #[test]
    fn test_concurrent_calls() {
        let handles = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0_u64..1_000_u64 {
                        let id = ShortId::generate();
                        let uuid = expand_uuid(&id).expect("generated ID expands");
                        assert_eq!(shorten_uuid(uuid).expect("valid UUID"), id);
                    }
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }
    }
}
