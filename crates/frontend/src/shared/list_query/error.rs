use thiserror::Error;

/// Failure of a single collection fetch. Stored inside `FetchState`, so it
/// is cheap to clone and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to build request: {0}")]
    InvalidRequest(String),
    #[error("failed to start request: {0}")]
    Spawn(String),
}

impl FetchError {
    /// HTTP status for non-2xx responses
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Programmer errors raised synchronously by controller actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListQueryError {
    #[error("unknown filter key `{key}` for {endpoint}")]
    InvalidFilterKey { endpoint: &'static str, key: String },
    #[error("value `{value}` is not accepted by filter `{key}`")]
    InvalidFilterValue { key: String, value: String },
    #[error("page numbers start at 1")]
    InvalidPage,
}

impl ListQueryError {
    /// Misuse by the calling view rather than bad user input.
    pub fn is_misuse(&self) -> bool {
        matches!(self, ListQueryError::InvalidFilterKey { .. } | ListQueryError::InvalidPage)
    }
}

/// Logs a rejected controller action. Misuse panics in debug builds.
pub fn report_rejected_action(e: &ListQueryError) {
    log::error!("{}", e);
    debug_assert!(!e.is_misuse(), "{}", e);
}
