use std::borrow::Cow;

/// Error types for session access.
///
/// A malformed stored field is not an error here: loads degrade to an
/// absent value and log instead (see `SessionContext::load`).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Not logged in{}: {message}", format_context(.context))]
    NotLoggedIn { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
