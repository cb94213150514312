use thiserror::Error;

use crate::llm::ProviderError;

/// Errors from catalog lookups.
///
/// Both variants indicate config or programmer errors: setup validates its
/// inputs, so these should never fire during a normal conversation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown persona: '{0}'")]
    UnknownPersona(String),

    #[error("friendship level {level} out of range (valid: 1..={max})")]
    LevelOutOfRange { level: u32, max: u32 },
}

/// Errors from companion profile construction.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("companion name must not be empty")]
    EmptyName,
}

/// Errors from session manager operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::UnknownPersona("mentor".to_string());
        assert_eq!(err.to_string(), "unknown persona: 'mentor'");

        let err = CatalogError::LevelOutOfRange { level: 6, max: 5 };
        assert!(err.to_string().contains('6'));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_session_error_wraps_sources() {
        let err: SessionError = CatalogError::LevelOutOfRange { level: 0, max: 5 }.into();
        assert!(matches!(err, SessionError::Catalog(_)));

        let err: SessionError = ProviderError::Unavailable("no key".to_string()).into();
        assert!(matches!(err, SessionError::Provider(_)));
    }
}
