use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors surfaced by the ConoHa provider.
///
/// Nothing is retried. The only tolerated HTTP failure is a 409 on record
/// creation, which never reaches the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A required argument or option is missing.
    #[error("{0}")]
    Validation(String),

    /// No usable credentials were configured.
    #[error("{0}")]
    Auth(String),

    #[error("No domain found for {domain}")]
    DomainNotFound { domain: String },

    /// The vendor returned several domains for one name.
    #[error("Too many domains found for {domain} ({count})")]
    AmbiguousDomain { domain: String, count: usize },

    /// Update without identifier did not resolve to exactly one record.
    #[error("Cannot determine record: {count} candidates matched")]
    AmbiguousOrMissingRecord { count: usize },

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Provider is not authenticated, call authenticate() first")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Status code carried by an HTTP failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure is caused by caller input or zone contents rather
    /// than by the vendor or the network. Used to pick the log level.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Auth(_)
                | Self::DomainNotFound { .. }
                | Self::AmbiguousOrMissingRecord { .. }
                | Self::NotAuthenticated
        )
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
