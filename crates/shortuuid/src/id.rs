// src/id.rs
//! Core short ID type and associated operations

use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::{
    alphabet,
    error::{DecodeError, DecodeReason, EncodeError},
    uuid_codec,
};

/// A base62 short identifier.
///
/// Every character is guaranteed to belong to the alphabet. Short IDs produced by this crate
/// never carry a leading zero symbol unless the encoded value is zero.
///
/// # Example
/// ```
/// use shortuuid::ShortId;
/// use std::str::FromStr;
///
/// let id = ShortId::from_str("2CvPdpytrcURpSLoPxYb30").unwrap();
/// assert_eq!(id.to_uuid().unwrap().to_string(), "4890586e-32a5-4f9c-a000-2a2bb68eb1ce");
/// assert!(ShortId::from_str("not-valid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortId(pub(crate) String);

impl ShortId {
    /// Get string slice representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shorten a UUID, see [`crate::shorten_uuid`].
    ///
    /// # Errors
    ///
    /// Propagates the [`EncodeError`] of [`crate::shorten_uuid`].
    pub fn from_uuid(uuid: Uuid) -> Result<Self, EncodeError> {
        uuid_codec::shorten_uuid(uuid)
    }

    /// Expand this short ID into a UUID, see [`crate::expand_uuid`].
    ///
    /// # Errors
    ///
    /// Fails if the value is wider than 128 bits.
    pub fn to_uuid(&self) -> Result<Uuid, DecodeError> {
        uuid_codec::expand_uuid(self.as_str())
    }

    /// Short ID of a fresh random (version 4) UUID.
    pub fn generate() -> Self {
        use rand::distr::Distribution;

        crate::ShortUuidDist.sample(&mut rand::rng())
    }
}

#[cfg_attr(test, mutants::skip)]
impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for ShortId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for ShortId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ShortId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<ShortId> for String {
    fn from(id: ShortId) -> Self {
        id.0
    }
}

impl FromStr for ShortId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecodeError::new(s, DecodeReason::Empty));
        }

        if let Some((position, character)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !alphabet::contains(*c))
        {
            return Err(DecodeError::new(
                s,
                DecodeReason::InvalidCharacter {
                    character,
                    position,
                },
            ));
        }

        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<String> for ShortId {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl TryFrom<&ShortId> for Uuid {
    type Error = DecodeError;

    fn try_from(value: &ShortId) -> Result<Self, Self::Error> {
        value.to_uuid()
    }
}

#[cfg_attr(test, mutants::skip)]
impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
/// `ShortId` serializes as a plain string and is validated against the alphabet when
/// deserialized.
///
/// # Examples
///
/// ```
/// use serde::{Serialize, Deserialize};
/// use shortuuid::ShortId;
///
/// #[derive(Serialize, Deserialize)]
/// struct MyStruct {
///     id: ShortId,
/// }
/// ```
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    use super::ShortId;

    impl Serialize for ShortId {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for ShortId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}
