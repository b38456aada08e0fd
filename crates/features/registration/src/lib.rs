//! Registration feature slice for the EPOCH festival site.
//!
//! This crate owns the business logic of team registration:
//!
//! * [`form::FormStateController`]: which form sections are visible and
//!   required for the selected event, including the optional third-member
//!   slot; visibility is a pure projection of explicit state.
//! * [`validator`]: pure checks over a draft (required fields, formats,
//!   cross-field rules). First failing rule wins, matching the one-message-
//!   at-a-time surface of the site.
//! * [`eligibility`]: advisory counting of prior technical/non-technical
//!   registrations per EPOCH ID against the fixed caps.
//! * [`orchestrator`]: the per-submission state machine of local validation,
//!   one batched identity check, one registration call, structured outcome.
//! * [`gateway`]: the transport seam; the `client` cargo feature adds an
//!   HTTP implementation and its layered configuration.
//!
//! The backend remains authoritative for every cap; everything here exists
//! to fail fast on the client.

pub mod eligibility;
pub mod error;
pub mod form;
pub mod gateway;
pub mod orchestrator;
pub mod validator;

#[cfg(feature = "client")]
pub mod config;

pub use eligibility::{Eligibility, RegistrationCounts, check_eligibility, count_for};
pub use error::RegistrationError;
pub use form::{FormStateController, FormVisibility};
pub use gateway::RegistrationGateway;
pub use orchestrator::{Orchestrator, SubmitOutcome, SubmitPhase};
pub use validator::{FieldError, FormField, ParticipantSlot, validate};

#[cfg(feature = "client")]
pub use config::ClientConfig;
#[cfg(feature = "client")]
pub use gateway::HttpGateway;
