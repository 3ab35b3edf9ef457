// src/error.rs
//! Error types for short ID operations

use thiserror::Error;

/// A convienent wrapper over `Result` for callers mixing both directions.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Either direction failing.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[allow(
    clippy::missing_docs_in_private_items,
    missing_docs,
    reason = "Error type is self explanatory"
)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The forward transform (plaintext to short ID) could not proceed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("encode error for input '{input}': {reason}")]
pub struct EncodeError {
    /// The input that failed to encode.
    input: String,
    /// What went wrong.
    reason: EncodeReason,
}

impl EncodeError {
    /// Record an encode failure for `input`.
    pub(crate) fn new(input: impl Into<String>, reason: EncodeReason) -> Self {
        let err = Self {
            input: input.into(),
            reason,
        };
        tracing::debug!(input = %err.input, reason = %err.reason, "failed to shorten");
        err
    }

    /// The input that failed to encode.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why encoding failed.
    pub fn reason(&self) -> &EncodeReason {
        &self.reason
    }
}

/// Why an [`EncodeError`] was raised.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[allow(
    clippy::missing_docs_in_private_items,
    missing_docs,
    reason = "Error type is self explanatory"
)]
pub enum EncodeReason {
    #[error("input string cannot be empty")]
    EmptyInput,
    #[error("UUID string cannot be empty")]
    EmptyUuid,
    #[error("invalid UUID format: expected 32 hex characters after removing hyphens, got {0}")]
    InvalidUuidLength(usize),
    #[error(
        "invalid UUID format: contains non-hex characters (valid characters: 0-9, a-f, A-F, hyphens)"
    )]
    NonHexCharacters,
}

/// The reverse transform (short ID to plaintext) could not proceed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("decode error for short ID '{short_id}': {reason}")]
pub struct DecodeError {
    /// The short ID that failed to decode.
    short_id: String,
    /// What went wrong.
    reason: DecodeReason,
}

impl DecodeError {
    /// Record a decode failure for `short_id`.
    pub(crate) fn new(short_id: impl Into<String>, reason: DecodeReason) -> Self {
        let err = Self {
            short_id: short_id.into(),
            reason,
        };
        tracing::debug!(short_id = %err.short_id, reason = %err.reason, "failed to expand");
        err
    }

    /// The short ID that failed to decode.
    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    /// Why decoding failed.
    pub fn reason(&self) -> &DecodeReason {
        &self.reason
    }
}

/// Why a [`DecodeError`] was raised.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[allow(
    clippy::missing_docs_in_private_items,
    missing_docs,
    reason = "Error type is self explanatory"
)]
pub enum DecodeReason {
    #[error("short ID cannot be empty")]
    Empty,
    #[error("invalid character '{character}' in short ID (valid characters: 0-9, A-Z, a-z)")]
    InvalidCharacter { character: char, position: usize },
    #[error("decoded to invalid length: expected 32 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("failed to parse UUID: {0}")]
    InvalidUuid(#[source] uuid::Error),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::str::Utf8Error),
}
