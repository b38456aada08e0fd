//! Facade crate for the EPOCH festival registration core.
//! Re-exports domain primitives and aggregates the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `epoch` with the desired feature flags (`client` for the HTTP gateway).
//! - Build a [`SessionContext`](session::SessionContext), hand it to a
//!   [`FormStateController`](features::registration::FormStateController),
//!   and drive submission through an
//!   [`Orchestrator`](features::registration::Orchestrator).

pub use epoch_domain as domain;
pub use epoch_logger as logger;
pub use epoch_session as session;

/// Feature registry for runtime introspection.
pub mod features {
    pub use epoch_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "registration",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub use epoch_domain::{
    EpochId, EventCatalog, EventCategory, EventDescriptor, Participant, RegistrationDraft,
};
pub use epoch_registration::{
    FormStateController, Orchestrator, SubmitOutcome, check_eligibility, validate,
};
pub use epoch_session::{SessionContext, SessionStore};

#[cfg(test)]
mod tests {
    #[test]
    fn registration_slice_is_always_enabled() {
        assert!(super::features::is_enabled("registration"));
        assert!(!super::features::is_enabled("licensing"));
    }
}
