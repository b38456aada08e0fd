use crate::error::SessionError;
use crate::store::{SessionStore, keys};
use chrono::Utc;
use epoch_domain::EpochId;
use tracing::warn;

/// The typed identity view created at login and read throughout the form
/// lifecycle.
///
/// Construct it once with [`SessionContext::load`] and pass it by value into
/// whatever needs identity fields; components never reach into the store
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub is_logged_in: bool,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub epoch_id: Option<EpochId>,
}

impl SessionContext {
    /// Reads the current identity out of the store.
    ///
    /// A malformed stored EPOCH ID is treated as absent (and logged) rather
    /// than failing the load; the registration flow then behaves as it does
    /// for a user without an ID.
    #[must_use]
    pub fn load(store: &SessionStore) -> Self {
        let epoch_id = store.get(keys::EPOCH_ID).and_then(|raw| {
            EpochId::try_from(raw.as_str())
                .inspect_err(|e| warn!(%e, "discarding malformed stored EPOCH ID"))
                .ok()
        });

        Self {
            is_logged_in: store.get(keys::IS_LOGGED_IN).as_deref() == Some("true"),
            name: store.get(keys::USER_NAME).unwrap_or_default(),
            email: store.get(keys::USER_EMAIL).unwrap_or_default(),
            phone: store.get(keys::USER_PHONE).unwrap_or_default(),
            college: store.get(keys::USER_COLLEGE).unwrap_or_default(),
            epoch_id,
        }
    }

    /// Writes this identity into the store as a login, in one batch.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when the context carries no
    /// EPOCH ID; an identity without one cannot register for anything.
    pub fn login(&self, store: &SessionStore) -> Result<(), SessionError> {
        let epoch_id = self.epoch_id.as_ref().ok_or_else(|| SessionError::NotLoggedIn {
            message: "cannot log in without an EPOCH ID".into(),
            context: None,
        })?;

        store.set_many([
            (keys::IS_LOGGED_IN, "true".to_owned()),
            (keys::USER_NAME, self.name.clone()),
            (keys::USER_EMAIL, self.email.clone()),
            (keys::USER_PHONE, self.phone.clone()),
            (keys::USER_COLLEGE, self.college.clone()),
            (keys::EPOCH_ID, epoch_id.as_str().to_owned()),
            (keys::LOGIN_TIME, Utc::now().to_rfc3339()),
        ]);
        Ok(())
    }

    /// Whether this context can open a registration form at all.
    #[must_use]
    pub fn can_register(&self) -> bool {
        self.is_logged_in && self.epoch_id.is_some()
    }
}
