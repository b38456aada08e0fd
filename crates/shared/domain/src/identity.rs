//! EPOCH identity IDs.
//!
//! An EPOCH ID is the participant's festival registration identifier:
//! the literal prefix `EPOCH` followed by exactly three digits. Matching is
//! case-insensitive on capture and the stored form is always uppercase, so
//! `epoch001`, `Epoch001` and `EPOCH001` all normalize to the same value.

use crate::constants::EPOCH_ID_LEN;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const EPOCH_ID_PREFIX: &str = "EPOCH";

/// A validated, uppercase-normalized EPOCH ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochId(String);

impl EpochId {
    /// Returns `true` if `candidate` is a well-formed EPOCH ID, ignoring case
    /// and surrounding whitespace.
    #[must_use]
    pub fn matches(candidate: &str) -> bool {
        // Byte-wise: a candidate of the right byte length but with
        // multi-byte characters can never match the all-ASCII shape.
        let candidate = candidate.trim().as_bytes();
        if candidate.len() != EPOCH_ID_LEN {
            return false;
        }
        let (prefix, digits) = candidate.split_at(EPOCH_ID_PREFIX.len());
        prefix.eq_ignore_ascii_case(EPOCH_ID_PREFIX.as_bytes())
            && digits.iter().all(u8::is_ascii_digit)
    }

    /// Returns the normalized string form, e.g. `EPOCH001`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality against an arbitrary candidate string.
    ///
    /// Historical registrations may carry IDs in any casing; comparisons must
    /// never depend on how an ID was typed.
    #[must_use]
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl TryFrom<&str> for EpochId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        if !Self::matches(value) {
            return Err(DomainError::InvalidEpochId {
                message: value.trim().to_owned().into(),
                context: Some("Expected EPOCH followed by 3 digits, e.g. EPOCH001".into()),
            });
        }
        Ok(Self(value.trim().to_ascii_uppercase()))
    }
}

impl TryFrom<String> for EpochId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for EpochId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpochId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
