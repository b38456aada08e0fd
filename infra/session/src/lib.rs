//! # Session
//!
//! A session-scoped key-value store and the typed identity view over it.
//!
//! The browser keeps identity fields in a string-valued session store; this
//! crate models that store abstractly and exposes [`SessionContext`], a value
//! loaded once and handed to the form controller and eligibility call sites.
//! No other component reads the store directly.
//!
//! Logout removes every session key under a single write-lock acquisition,
//! so a concurrent reader observes either the full identity or none of it.

mod context;
mod error;
mod store;

pub use context::SessionContext;
pub use error::SessionError;
pub use store::{SessionStore, keys};
