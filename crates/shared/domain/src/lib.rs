//! # Domain Models
//!
//! Pure domain types for the EPOCH festival registration flow with minimal
//! dependencies (`serde`, `chrono`). Keep it lean: no I/O, networking, or
//! heavy logic, just data and simple helpers.
//!
//! The [`catalog::EventCatalog`] is the single source of truth for per-event
//! rules (cardinality, category, required fields). Every other component
//! (form state, validation, eligibility) consults it instead of carrying its
//! own table.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod event;
pub mod identity;
pub mod participant;
pub mod registration;

pub use catalog::EventCatalog;
pub use error::DomainError;
pub use event::{EventCategory, EventDescriptor, FormKind};
pub use identity::EpochId;
pub use participant::{Participant, ParticipantFields};
pub use registration::{
    IdentityCheckRequest, IdentityCheckResponse, RegistrationDraft, RegistrationPayload,
    RegistrationRecord, RegistrationResponse,
};
