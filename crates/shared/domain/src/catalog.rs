//! The event catalog: one authoritative table, many consumers.
//!
//! `paper-presentation` and `prompt-arena` offer the optional third member.
//! `connection` admits three members on the backend but the form never
//! offers the slot, which is why the affordance is an explicit flag rather
//! than a function of `max_participants`.

use crate::constants::{BINARY_BATTLE, CONNECTION, FLIPFLOP, PAPER_PRESENTATION, PROMPT_ARENA};
use crate::event::{EventCategory, EventDescriptor, FormKind};
use std::sync::LazyLock;

static CATALOG: LazyLock<Vec<EventDescriptor>> = LazyLock::new(|| {
    let table = vec![
        EventDescriptor::builder()
            .id(PAPER_PRESENTATION)
            .display_name("Paper Presentation")
            .form_kind(FormKind::Identity)
            .category(EventCategory::Technical)
            .min_participants(2)
            .max_participants(3)
            .requires_paper_title(true)
            .allows_third_participant(true)
            .registration_prefix("PPT")
            .build(),
        EventDescriptor::builder()
            .id(BINARY_BATTLE)
            .display_name("Binary Battle")
            .form_kind(FormKind::Identity)
            .category(EventCategory::Technical)
            .min_participants(2)
            .max_participants(2)
            .registration_prefix("BBT")
            .build(),
        EventDescriptor::builder()
            .id(PROMPT_ARENA)
            .display_name("Prompt Arena")
            .form_kind(FormKind::Identity)
            .category(EventCategory::Technical)
            .min_participants(2)
            .max_participants(3)
            .allows_third_participant(true)
            .registration_prefix("PMA")
            .build(),
        EventDescriptor::builder()
            .id(CONNECTION)
            .display_name("Connection")
            .form_kind(FormKind::Identity)
            .category(EventCategory::NonTechnical)
            .min_participants(2)
            .max_participants(3)
            .registration_prefix("CON")
            .build(),
        EventDescriptor::builder()
            .id(FLIPFLOP)
            .display_name("Flip Flop")
            .form_kind(FormKind::Identity)
            .category(EventCategory::NonTechnical)
            .min_participants(1)
            .max_participants(1)
            .requires_team_name(false)
            .is_solo(true)
            .registration_prefix("FLP")
            .build(),
    ];
    debug_assert!(table.iter().all(EventDescriptor::invariants_hold));
    table
});

/// Pure lookup over the static event table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCatalog;

impl EventCatalog {
    /// Looks up the descriptor for `event_id`. Returns `None` for unknown
    /// events; callers decide whether that is an error.
    #[must_use]
    pub fn describe(event_id: &str) -> Option<&'static EventDescriptor> {
        CATALOG.iter().find(|d| d.id == event_id)
    }

    /// All known descriptors, in catalog order.
    #[must_use]
    pub fn all() -> &'static [EventDescriptor] {
        &CATALOG
    }

    /// Convenience category lookup used by the eligibility counter.
    #[must_use]
    pub fn category_of(event_id: &str) -> Option<EventCategory> {
        Self::describe(event_id).map(|d| d.category)
    }
}
