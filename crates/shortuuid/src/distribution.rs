// src/distribution.rs
//! Random generation of short IDs

use rand::{Rng, distr::Distribution};
use uuid::Builder;

use crate::{ShortId, base62};

/// Distribution of short IDs for random version 4 UUIDs
///
/// # Example
/// ```
/// use shortuuid::ShortUuidDist;
/// use rand::distr::Distribution;
///
/// let id = ShortUuidDist.sample(&mut rand::rng());
/// assert_eq!(id.to_uuid().unwrap().get_version_num(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortUuidDist;

impl Distribution<ShortId> for ShortUuidDist {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShortId {
        let mut bytes = [0_u8; 16];
        rng.fill(&mut bytes);

        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        let short_id = base62::int_to_short(&uuid.as_u128().into());
        tracing::trace!(%uuid, %short_id, "generated short ID");
        short_id
    }
}
