//! Explicit form state for the registration modal.
//!
//! Section visibility is a pure projection of explicit state, never state
//! itself. The controller owns the solo-vs-team split and the optional
//! third-member toggle, and pre-fills the leader's block from the session
//! identity.

use crate::error::RegistrationError;
use crate::validator::ParticipantSlot;
use chrono::{DateTime, Utc};
use epoch_domain::{EventCatalog, EventDescriptor, FormKind, ParticipantFields, RegistrationDraft};
use epoch_session::SessionContext;
use tracing::{debug, warn};

/// Which form sections are currently shown. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormVisibility {
    pub team_name: bool,
    pub paper_title: bool,
    pub participant2: bool,
    /// The "add participant 3" affordance.
    pub third_affordance: bool,
    /// The third participant's input block.
    pub participant3: bool,
}

/// Drives the registration form for one selected event at a time.
#[derive(Debug, Clone)]
pub struct FormStateController {
    session: SessionContext,
    selected: Option<&'static EventDescriptor>,
    team_name: String,
    paper_title: String,
    participants: [ParticipantFields; 3],
    agreed_to_terms: bool,
    third_offered: bool,
}

impl FormStateController {
    #[must_use]
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            selected: None,
            team_name: String::new(),
            paper_title: String::new(),
            participants: Default::default(),
            agreed_to_terms: false,
            third_offered: false,
        }
    }

    /// Selects an event, resetting every field and pre-filling the leader's
    /// block from the session identity.
    pub fn select_event(
        &mut self,
        event_id: &str,
    ) -> Result<&'static EventDescriptor, RegistrationError> {
        let descriptor =
            EventCatalog::describe(event_id).ok_or_else(|| RegistrationError::UnknownEvent {
                message: event_id.to_owned().into(),
                context: None,
            })?;

        self.reset_fields();
        self.selected = Some(descriptor);
        // Generic forms capture non-registrant contacts; only identity
        // forms pre-fill from the session's EPOCH identity.
        if descriptor.form_kind == FormKind::Identity {
            self.prefill_leader();
        }
        debug!(event = descriptor.id, "event selected");
        Ok(descriptor)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static EventDescriptor> {
        self.selected
    }

    /// Projects the current state onto section visibility.
    #[must_use]
    pub fn visibility(&self) -> FormVisibility {
        let Some(descriptor) = self.selected else {
            return FormVisibility::default();
        };
        if descriptor.is_solo {
            // Solo events show only the leader's own details.
            return FormVisibility::default();
        }
        FormVisibility {
            team_name: descriptor.requires_team_name,
            paper_title: descriptor.requires_paper_title,
            participant2: true,
            third_affordance: descriptor.allows_third_participant && !self.third_offered,
            participant3: self.third_offered,
        }
    }

    /// Reveals the third participant's block.
    ///
    /// Valid only when the selected event offers the affordance and it is not
    /// already open. Anything else is a no-op in the UI sense, but logged as
    /// an invariant violation since a non-UI caller should never get here.
    pub fn offer_third_participant(&mut self) {
        let applicable =
            self.selected.is_some_and(|d| d.allows_third_participant) && !self.third_offered;
        if !applicable {
            warn!(
                event = self.selected.map_or("<none>", |d| d.id),
                already_offered = self.third_offered,
                "offer_third_participant on an event without the affordance"
            );
            return;
        }
        self.third_offered = true;
    }

    /// Clears the third participant's fields and re-shows the affordance.
    pub fn withdraw_third_participant(&mut self) {
        self.participants[2] = ParticipantFields::default();
        self.third_offered = false;
    }

    /// Resets to the initial state (no event selected), regardless of any
    /// submission outcome.
    pub fn close_form(&mut self) {
        self.reset_fields();
        self.selected = None;
    }

    #[must_use]
    pub fn third_participant_offered(&self) -> bool {
        self.third_offered
    }

    pub fn set_team_name(&mut self, value: impl Into<String>) {
        self.team_name = value.into();
    }

    pub fn set_paper_title(&mut self, value: impl Into<String>) {
        self.paper_title = value.into();
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    /// Writes a participant's raw fields. Writing the third slot while its
    /// block is hidden is dropped (and logged); hidden inputs don't exist.
    pub fn set_participant(&mut self, slot: ParticipantSlot, fields: ParticipantFields) {
        let index = match slot {
            ParticipantSlot::Leader => 0,
            ParticipantSlot::Second => 1,
            ParticipantSlot::Third => {
                if !self.third_offered {
                    warn!("ignoring write to hidden third-participant block");
                    return;
                }
                2
            },
        };
        self.participants[index] = fields;
    }

    #[must_use]
    pub fn participant(&self, slot: ParticipantSlot) -> &ParticipantFields {
        match slot {
            ParticipantSlot::Leader => &self.participants[0],
            ParticipantSlot::Second => &self.participants[1],
            ParticipantSlot::Third => &self.participants[2],
        }
    }

    /// Captures the current fields as a draft, stamped with `submitted_at`.
    ///
    /// EPOCH IDs are trimmed and normalized to uppercase on capture; other
    /// fields are trimmed. The third slot is included only while its block is
    /// open; it may still be partially filled, which validation rejects.
    pub fn collect_at(
        &self,
        submitted_at: DateTime<Utc>,
    ) -> Result<RegistrationDraft, RegistrationError> {
        let descriptor = self.selected.ok_or_else(|| RegistrationError::Internal {
            message: "no event selected".into(),
            context: Some("collect".into()),
        })?;

        let mut participants = vec![normalize(&self.participants[0])];
        if !descriptor.is_solo {
            participants.push(normalize(&self.participants[1]));
        }
        if self.third_offered {
            participants.push(normalize(&self.participants[2]));
        }

        let visibility = self.visibility();
        Ok(RegistrationDraft {
            event_id: descriptor.id.to_owned(),
            team_name: visibility.team_name.then(|| self.team_name.trim().to_owned()),
            paper_title: visibility.paper_title.then(|| self.paper_title.trim().to_owned()),
            participants,
            agreed_to_terms: self.agreed_to_terms,
            submitted_at,
        })
    }

    /// Captures the current fields as a draft stamped with the current time.
    pub fn collect(&self) -> Result<RegistrationDraft, RegistrationError> {
        self.collect_at(Utc::now())
    }

    /// Fills the form from an existing draft, the inverse of [`collect_at`]:
    /// for a well-formed draft, `collect_at(draft.submitted_at)` returns the
    /// same draft back.
    ///
    /// [`collect_at`]: FormStateController::collect_at
    pub fn populate(&mut self, draft: &RegistrationDraft) -> Result<(), RegistrationError> {
        self.select_event(&draft.event_id)?;

        self.team_name = draft.team_name.clone().unwrap_or_default();
        self.paper_title = draft.paper_title.clone().unwrap_or_default();
        self.agreed_to_terms = draft.agreed_to_terms;

        if let Some(leader) = draft.participants.first() {
            self.participants[0] = leader.clone();
        }
        if let Some(second) = draft.participants.get(1) {
            self.participants[1] = second.clone();
        }
        if let Some(third) = draft.participants.get(2) {
            self.offer_third_participant();
            self.set_participant(ParticipantSlot::Third, third.clone());
        }
        Ok(())
    }

    fn prefill_leader(&mut self) {
        self.participants[0] = ParticipantFields {
            epoch_id: self
                .session
                .epoch_id
                .as_ref()
                .map(|id| id.as_str().to_owned())
                .unwrap_or_default(),
            name: self.session.name.clone(),
            college: self.session.college.clone(),
            mobile: self.session.phone.clone(),
        };
    }

    fn reset_fields(&mut self) {
        self.team_name.clear();
        self.paper_title.clear();
        self.participants = Default::default();
        self.agreed_to_terms = false;
        self.third_offered = false;
    }
}

fn normalize(fields: &ParticipantFields) -> ParticipantFields {
    ParticipantFields {
        epoch_id: fields.epoch_id.trim().to_ascii_uppercase(),
        name: fields.name.trim().to_owned(),
        college: fields.college.trim().to_owned(),
        mobile: fields.mobile.trim().to_owned(),
    }
}
