use crate::error::{ProviderError, Result};

/// Authentication state of a provider instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { token: String, domain_id: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Token and domain id, or `NotAuthenticated`.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match self {
            Self::Authenticated { token, domain_id } => Ok((token.as_str(), domain_id.as_str())),
            Self::Unauthenticated => Err(ProviderError::NotAuthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_session_has_no_credentials() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.credentials(),
            Err(ProviderError::NotAuthenticated)
        ));
    }

    #[test]
    fn authenticated_session_yields_token_and_domain() {
        let session = Session::Authenticated {
            token: "tok".into(),
            domain_id: "dom".into(),
        };
        assert_eq!(session.credentials().unwrap(), ("tok", "dom"));
    }
}
