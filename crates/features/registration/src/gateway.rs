//! The transport seam between the orchestrator and the backend.
//!
//! The orchestrator only speaks [`RegistrationGateway`]; tests drive it with
//! an in-memory mock and the `client` feature supplies [`HttpGateway`], the
//! real HTTP implementation. Both endpoints return structured JSON bodies on
//! failure statuses, so responses are decoded regardless of status code.

use crate::error::RegistrationError;
use epoch_domain::{EpochId, IdentityCheckResponse, RegistrationPayload, RegistrationResponse};

/// Backend operations the submission sequence needs, in call order.
#[allow(async_fn_in_trait)]
pub trait RegistrationGateway {
    /// Batched existence check for every participant's EPOCH ID.
    async fn verify_identities(
        &self,
        ids: &[EpochId],
    ) -> Result<IdentityCheckResponse, RegistrationError>;

    /// Submits the registration itself. Called at most once per attempt, and
    /// only after the identity check reported every ID valid.
    async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, RegistrationError>;
}

#[cfg(feature = "client")]
pub use http::HttpGateway;

#[cfg(feature = "client")]
mod http {
    use super::RegistrationGateway;
    use crate::config::ClientConfig;
    use crate::error::RegistrationError;
    use epoch_domain::{
        EpochId, IdentityCheckRequest, IdentityCheckResponse, RegistrationPayload,
        RegistrationResponse,
    };
    use tracing::debug;

    const VALIDATE_PATH: &str = "/api/validate-epoch-id";
    const REGISTER_PATH: &str = "/api/register-event";

    /// `reqwest`-backed gateway against the festival backend.
    #[derive(Debug, Clone)]
    pub struct HttpGateway {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpGateway {
        /// Builds a gateway from the layered client configuration.
        ///
        /// # Errors
        ///
        /// Returns [`RegistrationError::Transport`] if the underlying client
        /// cannot be constructed.
        pub fn new(config: &ClientConfig) -> Result<Self, RegistrationError> {
            let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
            Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_owned() })
        }
    }

    impl RegistrationGateway for HttpGateway {
        async fn verify_identities(
            &self,
            ids: &[EpochId],
        ) -> Result<IdentityCheckResponse, RegistrationError> {
            let url = format!("{}{VALIDATE_PATH}", self.base_url);
            debug!(%url, count = ids.len(), "verifying EPOCH IDs");
            let body = IdentityCheckRequest { epoch_ids: ids.to_vec() };
            let response = self.client.post(&url).json(&body).send().await?;
            Ok(response.json::<IdentityCheckResponse>().await?)
        }

        async fn submit_registration(
            &self,
            payload: &RegistrationPayload,
        ) -> Result<RegistrationResponse, RegistrationError> {
            let url = format!("{}{REGISTER_PATH}", self.base_url);
            debug!(%url, event = %payload.event_id, "submitting registration");
            let response = self.client.post(&url).json(payload).send().await?;
            Ok(response.json::<RegistrationResponse>().await?)
        }
    }
}
