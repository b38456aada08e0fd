//! Pure draft validation.
//!
//! Rules run in a fixed priority order and the first violation wins: the
//! site surfaces one message at a time, and callers stop at the first
//! failing rule. Order: team name / paper title presence, participant 1
//! completeness, participant 1 formats, participant 2 (unless solo),
//! participant 3 completeness-or-absence, terms checkbox.

use epoch_domain::constants::MOBILE_LEN;
use epoch_domain::{EpochId, EventDescriptor, ParticipantFields, RegistrationDraft};
use std::borrow::Cow;
use std::fmt;

/// Which participant block a failing field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantSlot {
    Leader,
    Second,
    Third,
}

impl fmt::Display for ParticipantSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leader => write!(f, "Participant 1"),
            Self::Second => write!(f, "Participant 2"),
            Self::Third => write!(f, "Participant 3"),
        }
    }
}

/// The form field a validation error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TeamName,
    PaperTitle,
    /// Completeness of a whole participant block.
    Participant(ParticipantSlot),
    EpochId(ParticipantSlot),
    Mobile(ParticipantSlot),
    Terms,
    /// The draft's participant list itself (cardinality violations).
    Cardinality,
}

/// A single validation failure: the offending field plus a user-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: Cow<'static, str>,
}

impl FieldError {
    fn new(field: FormField, message: impl Into<Cow<'static, str>>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Exactly 10 digits.
#[must_use]
pub fn is_valid_mobile(mobile: &str) -> bool {
    let mobile = mobile.trim();
    mobile.len() == MOBILE_LEN && mobile.chars().all(|c| c.is_ascii_digit())
}

/// `local@domain.tld` shape: non-whitespace local part, non-whitespace
/// domain containing a dot. Contact-field rule for
/// [`FormKind::Generic`](epoch_domain::FormKind) forms; see that type for
/// when generic forms apply.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.is_empty()
        && !domain.contains(char::is_whitespace)
        && !domain.contains('@')
}

/// Validates a draft against its event's rules. Returns the first failing
/// rule, or `Ok(())` when the draft is submittable.
pub fn validate(
    draft: &RegistrationDraft,
    descriptor: &EventDescriptor,
) -> Result<(), FieldError> {
    check_cardinality(draft, descriptor)?;

    if descriptor.requires_team_name
        && draft.team_name.as_deref().unwrap_or("").trim().is_empty()
    {
        return Err(FieldError::new(FormField::TeamName, "Please enter Team Name"));
    }

    if descriptor.requires_paper_title
        && draft.paper_title.as_deref().unwrap_or("").trim().is_empty()
    {
        return Err(FieldError::new(FormField::PaperTitle, "Please enter Paper Title"));
    }

    let leader = draft.participants.first().ok_or_else(|| {
        FieldError::new(FormField::Participant(ParticipantSlot::Leader), "Please fill all your details")
    })?;
    if !leader.is_complete() {
        return Err(FieldError::new(
            FormField::Participant(ParticipantSlot::Leader),
            "Please fill all your details",
        ));
    }
    check_formats(leader, ParticipantSlot::Leader)?;

    if !descriptor.is_solo {
        let second = draft.participants.get(1).filter(|p| p.is_complete()).ok_or_else(|| {
            FieldError::new(
                FormField::Participant(ParticipantSlot::Second),
                "Please fill all Participant 2 details",
            )
        })?;
        check_formats(second, ParticipantSlot::Second)?;
    }

    if let Some(third) = draft.participants.get(2) {
        check_third_participant(third)?;
    }

    if !draft.agreed_to_terms {
        return Err(FieldError::new(
            FormField::Terms,
            "Please agree to the terms and conditions",
        ));
    }

    Ok(())
}

fn check_cardinality(
    draft: &RegistrationDraft,
    descriptor: &EventDescriptor,
) -> Result<(), FieldError> {
    if draft.participants.is_empty() || draft.participants.len() > 3 {
        return Err(FieldError::new(
            FormField::Cardinality,
            "A registration takes between one and three participants",
        ));
    }
    let third_filled = draft.participants.get(2).is_some_and(|p| !p.is_empty());
    let effective_max = usize::from(descriptor.effective_max(third_filled));
    if draft.participants.iter().skip(effective_max).any(|p| !p.is_empty()) {
        return Err(if descriptor.is_solo {
            FieldError::new(
                FormField::Cardinality,
                "This is a solo event; only your own details are accepted",
            )
        } else {
            FieldError::new(
                FormField::Cardinality,
                "This event does not take a third participant",
            )
        });
    }
    Ok(())
}

fn check_formats(fields: &ParticipantFields, slot: ParticipantSlot) -> Result<(), FieldError> {
    if !EpochId::matches(&fields.epoch_id) {
        let message = match slot {
            ParticipantSlot::Leader => {
                Cow::Borrowed("Please enter a valid EPOCH ID (e.g., EPOCH001)")
            },
            other => Cow::Owned(format!("Please enter a valid EPOCH ID for {other}")),
        };
        return Err(FieldError { field: FormField::EpochId(slot), message });
    }
    if !is_valid_mobile(&fields.mobile) {
        let message = match slot {
            ParticipantSlot::Leader => Cow::Borrowed("Please enter a valid 10-digit mobile number"),
            other => Cow::Owned(format!("Please enter a valid 10-digit mobile number for {other}")),
        };
        return Err(FieldError { field: FormField::Mobile(slot), message });
    }
    Ok(())
}

/// The third slot is all-or-nothing: four empty fields mean "absent", four
/// well-formed fields mean "present", anything in between is an error.
fn check_third_participant(third: &ParticipantFields) -> Result<(), FieldError> {
    if third.is_empty() {
        return Ok(());
    }
    if !third.is_complete() {
        return Err(FieldError::new(
            FormField::Participant(ParticipantSlot::Third),
            "Please fill all Participant 3 details or remove the participant",
        ));
    }
    check_formats(third, ParticipantSlot::Third)
}
