//! Environment credential lookup.
//!
//! The API key is read from environment variables, the highest-priority and
//! only credential source: `AMITY_API_KEY` first, then `GEMINI_API_KEY`.
//! The value is wrapped in [`SecretString`] immediately so it never appears
//! in Debug output or logs.

use secrecy::SecretString;

/// Env vars checked for the provider API key, in priority order.
const API_KEY_VARS: [&str; 2] = ["AMITY_API_KEY", "GEMINI_API_KEY"];

/// Look up the provider API key from the environment.
///
/// Returns `None` when no variable is set or the value is blank.
pub fn provider_api_key() -> Option<SecretString> {
    for var in API_KEY_VARS {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                return Some(SecretString::from(value));
            }
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_api_key_priority_order() {
        // SAFETY: tests in this module touch distinct variable names and
        // restore them before returning.
        unsafe {
            std::env::set_var("AMITY_API_KEY", "from-amity");
            std::env::set_var("GEMINI_API_KEY", "from-gemini");
        }

        let key = provider_api_key().unwrap();
        assert_eq!(key.expose_secret(), "from-amity");

        unsafe {
            std::env::remove_var("AMITY_API_KEY");
        }
        let key = provider_api_key().unwrap();
        assert_eq!(key.expose_secret(), "from-gemini");

        unsafe {
            std::env::remove_var("GEMINI_API_KEY");
        }
        assert!(provider_api_key().is_none());
    }
}
