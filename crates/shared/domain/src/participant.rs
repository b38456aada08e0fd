//! Participant records, raw and validated.

use crate::error::DomainError;
use crate::identity::EpochId;
use serde::{Deserialize, Serialize};

/// A validated participant as it goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub epoch_id: EpochId,
    pub name: String,
    pub college: String,
    pub mobile: String,
}

/// Raw participant fields as captured from the form, untrimmed and
/// unvalidated. The validator decides whether a group of fields is complete,
/// absent, or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantFields {
    pub epoch_id: String,
    pub name: String,
    pub college: String,
    pub mobile: String,
}

impl ParticipantFields {
    /// All four fields blank after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epoch_id.trim().is_empty()
            && self.name.trim().is_empty()
            && self.college.trim().is_empty()
            && self.mobile.trim().is_empty()
    }

    /// All four fields present after trimming (format not yet checked).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.epoch_id.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.college.trim().is_empty()
            && !self.mobile.trim().is_empty()
    }

    /// Converts to the wire form, trimming fields and normalizing the
    /// EPOCH ID to uppercase. Fails if the ID is malformed.
    pub fn to_participant(&self) -> Result<Participant, DomainError> {
        Ok(Participant {
            epoch_id: EpochId::try_from(self.epoch_id.as_str())?,
            name: self.name.trim().to_owned(),
            college: self.college.trim().to_owned(),
            mobile: self.mobile.trim().to_owned(),
        })
    }
}

impl From<&Participant> for ParticipantFields {
    fn from(p: &Participant) -> Self {
        Self {
            epoch_id: p.epoch_id.as_str().to_owned(),
            name: p.name.clone(),
            college: p.college.clone(),
            mobile: p.mobile.clone(),
        }
    }
}
