//! Per-event configuration records.

use serde::{Deserialize, Serialize};
use strum::Display;
use typed_builder::TypedBuilder;

/// Category used for the per-identity registration-cap rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EventCategory {
    Technical,
    NonTechnical,
}

/// Which registration form an event uses.
///
/// Identity forms capture EPOCH IDs per participant and pre-fill the leader
/// from the session. Generic forms capture name/email/phone only (checked
/// with the validator's email rule) and exist for future events whose
/// participants are not festival registrants; every cataloged event is
/// currently identity-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Identity,
    Generic,
}

/// Static per-event configuration.
///
/// `is_solo` and `allows_third_participant` are deliberately independent
/// booleans. The third-participant affordance is *not* derivable from
/// `max_participants`: an event may admit three members on the backend while
/// the form never offers the third slot (see `connection` in the catalog).
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct EventDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub form_kind: FormKind,
    pub category: EventCategory,
    pub min_participants: u8,
    pub max_participants: u8,
    #[builder(default = true)]
    pub requires_team_name: bool,
    #[builder(default = false)]
    pub requires_paper_title: bool,
    #[builder(default = false)]
    pub is_solo: bool,
    #[builder(default = false)]
    pub allows_third_participant: bool,
    /// Registration-ID prefix the backend uses for this event (e.g. `PPT`).
    #[builder(default = "EVT")]
    pub registration_prefix: &'static str,
}

impl EventDescriptor {
    /// Checks the structural invariants of a descriptor.
    ///
    /// A solo event has exactly one participant and never a team name or a
    /// third-member affordance.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let cardinality_ok = self.min_participants >= 1
            && self.min_participants <= self.max_participants
            && self.max_participants <= 3;
        let solo_ok = !self.is_solo
            || (self.min_participants == 1
                && self.max_participants == 1
                && !self.requires_team_name
                && !self.allows_third_participant);
        cardinality_ok && solo_ok
    }

    /// Upper participant bound the *form* enforces: 3 only when the third
    /// slot is actually offered, otherwise the declared pair cardinality.
    #[must_use]
    pub fn effective_max(&self, third_participant_filled: bool) -> u8 {
        if self.allows_third_participant && third_participant_filled {
            3
        } else if self.is_solo {
            1
        } else {
            2
        }
    }

    #[must_use]
    pub fn is_technical(&self) -> bool {
        self.category == EventCategory::Technical
    }
}
