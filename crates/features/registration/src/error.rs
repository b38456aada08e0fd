use std::borrow::Cow;

/// Errors of the registration flow itself.
///
/// Per-field validation failures travel as [`FieldError`] values and remote
/// verdicts (caps, full events, unknown IDs) as [`SubmitOutcome`] variants;
/// this enum covers what remains: malformed data, transport trouble, and
/// broken invariants. Retry is always user-initiated, never automatic.
///
/// [`FieldError`]: crate::validator::FieldError
/// [`SubmitOutcome`]: crate::orchestrator::SubmitOutcome
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Field format error{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Transport failure{}: {message}", format_context(.context))]
    Transport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown event{}: {message}", format_context(.context))]
    UnknownEvent { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<epoch_domain::DomainError> for RegistrationError {
    fn from(e: epoch_domain::DomainError) -> Self {
        match e {
            epoch_domain::DomainError::InvalidEpochId { message, context } => {
                Self::Format { message, context }
            },
            epoch_domain::DomainError::UnknownEvent { message, context } => {
                Self::UnknownEvent { message, context }
            },
        }
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for RegistrationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport { message: e.to_string().into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_when_present() {
        let error = RegistrationError::Internal {
            message: "no event selected".into(),
            context: Some("collect".into()),
        };
        assert_eq!(error.to_string(), "Internal registration error (collect): no event selected");

        let error =
            RegistrationError::Transport { message: "connection refused".into(), context: None };
        assert_eq!(error.to_string(), "Transport failure: connection refused");
    }

    #[test]
    fn malformed_id_converts_to_a_format_error() {
        let domain_error = epoch_domain::EpochId::try_from("EPOCH-XYZ").unwrap_err();
        assert!(matches!(RegistrationError::from(domain_error), RegistrationError::Format { .. }));
    }
}
