//! Advisory registration-cap counting.
//!
//! Counts are recomputed from the full cached history on every check rather
//! than maintained incrementally: the authoritative cap check happens
//! server-side, the client value is advisory and may be stale. A stale pass
//! here is fine: the orchestrator treats the server's cap verdict as final.

use crate::error::RegistrationError;
use epoch_domain::constants::{MAX_NON_TECHNICAL_EVENTS, MAX_TECHNICAL_EVENTS};
use epoch_domain::{EpochId, EventCatalog, EventCategory, RegistrationRecord};
use tracing::{debug, trace};

/// How many technical / non-technical registrations an EPOCH ID holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationCounts {
    pub technical: u32,
    pub non_technical: u32,
}

/// Verdict of a local cap check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Allowed,
    Denied { reason: String, category: EventCategory },
}

impl Eligibility {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Scans every historical registration's slots (leader, second, third) for
/// `id`, case-insensitively, and tallies by event category. Registrations
/// for events missing from the catalog are skipped.
#[must_use]
pub fn count_for(id: &EpochId, history: &[RegistrationRecord]) -> RegistrationCounts {
    let mut counts = RegistrationCounts::default();
    for record in history {
        if !record.involves(id.as_str()) {
            continue;
        }
        match EventCatalog::category_of(&record.event_id) {
            Some(EventCategory::Technical) => counts.technical += 1,
            Some(EventCategory::NonTechnical) => counts.non_technical += 1,
            None => trace!(event = %record.event_id, "skipping record for uncataloged event"),
        }
    }
    counts
}

/// Would registering `id` for `event_id` exceed the fixed caps
/// (2 technical, 1 non-technical)?
///
/// # Errors
///
/// Returns [`RegistrationError::UnknownEvent`] when `event_id` is not in the
/// catalog.
pub fn check_eligibility(
    id: &EpochId,
    event_id: &str,
    history: &[RegistrationRecord],
) -> Result<Eligibility, RegistrationError> {
    let category = EventCatalog::category_of(event_id).ok_or_else(|| {
        RegistrationError::UnknownEvent { message: event_id.to_owned().into(), context: None }
    })?;

    let counts = count_for(id, history);
    let verdict = match category {
        EventCategory::Technical if counts.technical >= MAX_TECHNICAL_EVENTS => {
            Eligibility::Denied {
                reason: format!(
                    "EPOCH ID {id} has already registered for {MAX_TECHNICAL_EVENTS} technical events. Maximum limit reached!"
                ),
                category,
            }
        },
        EventCategory::NonTechnical if counts.non_technical >= MAX_NON_TECHNICAL_EVENTS => {
            Eligibility::Denied {
                reason: format!(
                    "EPOCH ID {id} has already registered for {MAX_NON_TECHNICAL_EVENTS} non-technical event. Maximum limit reached!"
                ),
                category,
            }
        },
        _ => Eligibility::Allowed,
    };
    if let Eligibility::Denied { category, .. } = &verdict {
        debug!(%id, %category, "registration cap reached");
    }
    Ok(verdict)
}
