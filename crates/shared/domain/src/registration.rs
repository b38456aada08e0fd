//! Registration drafts, the wire contract, and cached history records.

use crate::identity::EpochId;
use crate::participant::{Participant, ParticipantFields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-progress, not-yet-submitted registration as captured from the form.
///
/// Participant fields are raw strings; the validator decides completeness and
/// format. Index 0 is always the leader. A third entry, when present, is
/// either fully populated or rejected by validation; a partial third is
/// never persisted or serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub event_id: String,
    pub team_name: Option<String>,
    pub paper_title: Option<String>,
    pub participants: Vec<ParticipantFields>,
    pub agreed_to_terms: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Serialized registration request, field-for-field what the backend expects
/// at `POST /api/register-event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub event_id: String,
    pub event_name: String,
    pub team_name: String,
    pub paper_title: String,
    pub is_solo_event: bool,
    pub participant1: Participant,
    pub participant2: Option<Participant>,
    pub participant3: Option<Participant>,
    /// ISO-8601 submission timestamp.
    pub registration_time: DateTime<Utc>,
}

impl RegistrationPayload {
    /// Every participant's EPOCH ID, leader first. This is the batch sent to
    /// the identity-verification endpoint.
    #[must_use]
    pub fn epoch_ids(&self) -> Vec<EpochId> {
        let mut ids = vec![self.participant1.epoch_id.clone()];
        if let Some(p) = &self.participant2 {
            ids.push(p.epoch_id.clone());
        }
        if let Some(p) = &self.participant3 {
            ids.push(p.epoch_id.clone());
        }
        ids
    }
}

/// Request body of `POST /api/validate-epoch-id`: every participant's ID in
/// one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCheckRequest {
    pub epoch_ids: Vec<EpochId>,
}

/// Response body of `POST /api/validate-epoch-id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityCheckResponse {
    pub valid: bool,
    #[serde(default)]
    pub invalid_ids: Vec<String>,
}

/// Response body of `POST /api/register-event`.
///
/// On failure the backend sets exactly one of the structured flags; absent
/// fields default so older backend revisions still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: Option<String>,
    pub limit_exceeded: bool,
    pub invalid_ids: Option<Vec<String>>,
    pub event_full: bool,
    pub current_count: Option<u32>,
    pub max_limit: Option<u32>,
    pub registration_id: Option<String>,
    pub event_name: Option<String>,
    pub team_name: Option<String>,
}

/// A locally cached prior registration, scanned by the eligibility counter.
/// Mirrors the stored shape of a submitted payload; slots 2 and 3 are
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub event_id: String,
    pub participant1: Option<Participant>,
    #[serde(default)]
    pub participant2: Option<Participant>,
    #[serde(default)]
    pub participant3: Option<Participant>,
}

impl RegistrationRecord {
    /// Iterates over the EPOCH IDs present in any slot.
    pub fn epoch_ids(&self) -> impl Iterator<Item = &EpochId> {
        [&self.participant1, &self.participant2, &self.participant3]
            .into_iter()
            .filter_map(|slot| slot.as_ref().map(|p| &p.epoch_id))
    }

    /// Whether `id` occupies any slot, compared case-insensitively.
    #[must_use]
    pub fn involves(&self, id: &str) -> bool {
        self.epoch_ids().any(|slot_id| slot_id.matches_ignore_case(id))
    }
}
