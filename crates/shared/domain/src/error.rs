use std::borrow::Cow;

/// Error types for domain-level parsing and lookups.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid EPOCH ID{}: {message}", format_context(.context))]
    InvalidEpochId { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown event{}: {message}", format_context(.context))]
    UnknownEvent { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
