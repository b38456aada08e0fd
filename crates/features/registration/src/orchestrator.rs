//! The per-submission state machine.
//!
//! `Idle → LocallyValidating → RemoteIdentityCheck → Submitting → Completed`,
//! falling back to `Idle` on any failure. The two network calls are strictly
//! sequential; the second is skipped entirely when the first reports any
//! invalid ID. Exactly one submission can be in flight at a time; the guard
//! is released unconditionally, so every failure path leaves the submit
//! control usable again. No retries, no idempotency: resubmission after a
//! failure is a brand-new attempt.

use crate::error::RegistrationError;
use crate::gateway::RegistrationGateway;
use crate::validator::{FieldError, validate};
use epoch_domain::{
    EventCatalog, EventDescriptor, RegistrationDraft, RegistrationPayload, RegistrationResponse,
};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Source of the default per-call timeout; the backend never specifies one.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

const VERIFY_FAILURE_MESSAGE: &str = "Failed to validate EPOCH IDs. Please try again.";
const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit registration. Please try again.";

/// Where the current (or last) submission attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    LocallyValidating,
    RemoteIdentityCheck,
    Submitting,
    Completed,
}

/// Tagged outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed before any network traffic. Submitting an
    /// unvalidated draft is a caller bug; the variant exists so the failure
    /// still surfaces instead of panicking.
    Invalid { error: FieldError },
    Success {
        registration_id: String,
        event_name: String,
        team_name: Option<String>,
    },
    CapExceeded { message: String },
    EventFull {
        event_name: String,
        current_count: u32,
        max_limit: u32,
        message: String,
    },
    InvalidIdentityIds { ids: Vec<String> },
    Failure { message: String },
}

/// Sequences one registration submission end to end.
#[derive(Debug)]
pub struct Orchestrator<G> {
    gateway: G,
    call_timeout: Duration,
    phase: Mutex<SubmitPhase>,
    in_flight: AtomicBool,
}

impl<G: RegistrationGateway> Orchestrator<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self::with_timeout(gateway, DEFAULT_CALL_TIMEOUT)
    }

    #[must_use]
    pub fn with_timeout(gateway: G, call_timeout: Duration) -> Self {
        Self {
            gateway,
            call_timeout,
            phase: Mutex::new(SubmitPhase::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        *self.phase.lock()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs one submission attempt for a draft that has already passed
    /// validation (re-checked here as the `LocallyValidating` phase).
    pub async fn submit(&self, draft: &RegistrationDraft) -> SubmitOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("rejecting submit: a submission is already in flight");
            return SubmitOutcome::Failure {
                message: "A submission is already in progress.".to_owned(),
            };
        }
        let guard = InFlightGuard { in_flight: &self.in_flight, phase: &self.phase };

        self.set_phase(SubmitPhase::LocallyValidating);
        let Some(descriptor) = EventCatalog::describe(&draft.event_id) else {
            return SubmitOutcome::Failure { message: format!("Invalid event: {}", draft.event_id) };
        };
        if let Err(error) = validate(draft, descriptor) {
            warn!(%error, "submit called with an unvalidated draft");
            return SubmitOutcome::Invalid { error };
        }
        let payload = match build_payload(draft, descriptor) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(%e, "validated draft failed payload conversion");
                return SubmitOutcome::Failure { message: SUBMIT_FAILURE_MESSAGE.to_owned() };
            },
        };

        self.set_phase(SubmitPhase::RemoteIdentityCheck);
        let ids = payload.epoch_ids();
        let check = match self
            .call(self.gateway.verify_identities(&ids), VERIFY_FAILURE_MESSAGE)
            .await
        {
            Ok(check) => check,
            Err(outcome) => return outcome,
        };
        if !check.valid {
            info!(invalid = ?check.invalid_ids, "identity check rejected IDs");
            return SubmitOutcome::InvalidIdentityIds { ids: check.invalid_ids };
        }

        self.set_phase(SubmitPhase::Submitting);
        let response = match self
            .call(self.gateway.submit_registration(&payload), SUBMIT_FAILURE_MESSAGE)
            .await
        {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        let outcome = interpret(response, descriptor);
        if matches!(outcome, SubmitOutcome::Success { .. }) {
            self.set_phase(SubmitPhase::Completed);
        }
        drop(guard);
        outcome
    }

    /// Wraps a gateway call with the per-call timeout; any transport or
    /// timeout failure collapses into a generic, user-retryable `Failure`.
    async fn call<T>(
        &self,
        fut: impl Future<Output = Result<T, RegistrationError>>,
        failure_message: &str,
    ) -> Result<T, SubmitOutcome> {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(%e, "gateway call failed");
                Err(SubmitOutcome::Failure { message: failure_message.to_owned() })
            },
            Err(_) => {
                warn!(timeout = ?self.call_timeout, "gateway call timed out");
                Err(SubmitOutcome::Failure { message: failure_message.to_owned() })
            },
        }
    }

    fn set_phase(&self, phase: SubmitPhase) {
        debug!(?phase, "submission phase");
        *self.phase.lock() = phase;
    }
}

/// Releases the single-flight lock on every exit path; a non-completed
/// attempt falls back to `Idle`.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    phase: &'a Mutex<SubmitPhase>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut phase = self.phase.lock();
        if *phase != SubmitPhase::Completed {
            *phase = SubmitPhase::Idle;
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

fn build_payload(
    draft: &RegistrationDraft,
    descriptor: &EventDescriptor,
) -> Result<RegistrationPayload, RegistrationError> {
    let leader = draft
        .participants
        .first()
        .ok_or_else(|| RegistrationError::Internal {
            message: "draft has no participants".into(),
            context: None,
        })?
        .to_participant()?;

    let second = if descriptor.is_solo {
        None
    } else {
        Some(
            draft
                .participants
                .get(1)
                .ok_or_else(|| RegistrationError::Internal {
                    message: "team draft is missing participant 2".into(),
                    context: None,
                })?
                .to_participant()?,
        )
    };

    // A validated third slot is either fully populated or all-empty.
    let third = draft
        .participants
        .get(2)
        .filter(|fields| !fields.is_empty())
        .map(epoch_domain::ParticipantFields::to_participant)
        .transpose()?;

    Ok(RegistrationPayload {
        event_id: draft.event_id.clone(),
        event_name: descriptor.display_name.to_owned(),
        team_name: draft.team_name.clone().unwrap_or_default(),
        paper_title: draft.paper_title.clone().unwrap_or_default(),
        is_solo_event: descriptor.is_solo,
        participant1: leader,
        participant2: second,
        participant3: third,
        registration_time: draft.submitted_at,
    })
}

fn interpret(response: RegistrationResponse, descriptor: &EventDescriptor) -> SubmitOutcome {
    if response.success {
        return SubmitOutcome::Success {
            registration_id: response.registration_id.unwrap_or_default(),
            event_name: response.event_name.unwrap_or_else(|| descriptor.display_name.to_owned()),
            team_name: response.team_name.filter(|name| !name.is_empty() && !descriptor.is_solo),
        };
    }
    if response.limit_exceeded {
        return SubmitOutcome::CapExceeded {
            message: response.message.unwrap_or_else(|| "Registration limit reached.".to_owned()),
        };
    }
    if response.event_full {
        return SubmitOutcome::EventFull {
            event_name: response.event_name.unwrap_or_else(|| descriptor.display_name.to_owned()),
            current_count: response.current_count.unwrap_or_default(),
            max_limit: response.max_limit.unwrap_or_default(),
            message: response.message.unwrap_or_else(|| "Event is full.".to_owned()),
        };
    }
    if let Some(ids) = response.invalid_ids {
        return SubmitOutcome::InvalidIdentityIds { ids };
    }
    SubmitOutcome::Failure {
        message: response
            .message
            .unwrap_or_else(|| "Registration failed. Please try again.".to_owned()),
    }
}
