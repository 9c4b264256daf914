//! Credential resolution for the external generation service.
//!
//! Values are looked up in environment variables first (including those
//! loaded from a `.env` file), then in the configuration file. An empty
//! string is treated the same as a missing value, so clearing a key in the
//! config file switches the pipeline back to template-only generation.

use crate::config::constants::env as env_names;
use std::env;
use tracing::{debug, warn};

/// Where to look for the service credential and relay endpoint
#[derive(Debug, Clone)]
pub struct CredentialSources {
    /// Primary credential environment variable name
    pub api_key_env: String,
    /// Secondary credential variables, checked in order
    pub api_key_fallback_envs: Vec<String>,
    /// Relay endpoint environment variable name
    pub relay_url_env: String,
    /// Credential from the configuration file
    pub api_key_config: Option<String>,
    /// Relay endpoint from the configuration file
    pub relay_url_config: Option<String>,
}

impl Default for CredentialSources {
    fn default() -> Self {
        Self {
            api_key_env: env_names::API_KEY.to_string(),
            api_key_fallback_envs: env_names::API_KEY_FALLBACKS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            relay_url_env: env_names::RELAY_URL.to_string(),
            api_key_config: None,
            relay_url_config: None,
        }
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is not an error; an unreadable one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment from .env"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

/// Resolve the service credential, or `None` for template-only mode
pub fn resolve_api_key(sources: &CredentialSources) -> Option<String> {
    if let Some(key) = non_empty_env(&sources.api_key_env) {
        return Some(key);
    }

    for name in &sources.api_key_fallback_envs {
        if let Some(key) = non_empty_env(name) {
            debug!(env = %name, "using fallback credential variable");
            return Some(key);
        }
    }

    non_empty(sources.api_key_config.as_ref())
}

/// Resolve the relay endpoint, or `None` for the direct call
pub fn resolve_relay_url(sources: &CredentialSources) -> Option<String> {
    non_empty_env(&sources.relay_url_env)
        .or_else(|| non_empty(sources.relay_url_config.as_ref()))
        .map(|url| url.trim().to_string())
}

/// Mask a credential for display: keep the last four characters
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn isolated(primary: &str, relay: &str) -> CredentialSources {
        CredentialSources {
            api_key_env: primary.to_string(),
            api_key_fallback_envs: Vec::new(),
            relay_url_env: relay.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_env_key_wins_over_config() {
        unsafe {
            env::set_var("TEST_SITECRAFT_KEY_PRIORITY", "env-key");
        }

        let sources = CredentialSources {
            api_key_config: Some("config-key".to_string()),
            ..isolated("TEST_SITECRAFT_KEY_PRIORITY", "TEST_SITECRAFT_RELAY_UNUSED_1")
        };

        assert_eq!(resolve_api_key(&sources).as_deref(), Some("env-key"));

        unsafe {
            env::remove_var("TEST_SITECRAFT_KEY_PRIORITY");
        }
    }

    #[test]
    fn test_fallback_env_is_consulted() {
        unsafe {
            env::set_var("TEST_SITECRAFT_KEY_FALLBACK", "fallback-key");
        }

        let sources = CredentialSources {
            api_key_fallback_envs: vec!["TEST_SITECRAFT_KEY_FALLBACK".to_string()],
            ..isolated("TEST_SITECRAFT_KEY_MISSING_1", "TEST_SITECRAFT_RELAY_UNUSED_2")
        };

        assert_eq!(resolve_api_key(&sources).as_deref(), Some("fallback-key"));

        unsafe {
            env::remove_var("TEST_SITECRAFT_KEY_FALLBACK");
        }
    }

    #[test]
    fn test_config_key_used_when_env_missing() {
        let sources = CredentialSources {
            api_key_config: Some("config-key".to_string()),
            ..isolated("TEST_SITECRAFT_KEY_MISSING_2", "TEST_SITECRAFT_RELAY_UNUSED_3")
        };

        assert_eq!(resolve_api_key(&sources).as_deref(), Some("config-key"));
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let sources = CredentialSources {
            api_key_config: Some("   ".to_string()),
            relay_url_config: Some(String::new()),
            ..isolated("TEST_SITECRAFT_KEY_MISSING_3", "TEST_SITECRAFT_RELAY_MISSING_1")
        };

        assert!(resolve_api_key(&sources).is_none());
        assert!(resolve_relay_url(&sources).is_none());
    }

    #[test]
    fn test_relay_url_is_trimmed() {
        let sources = CredentialSources {
            relay_url_config: Some("  https://relay.example/webhook/site  ".to_string()),
            ..isolated("TEST_SITECRAFT_KEY_MISSING_4", "TEST_SITECRAFT_RELAY_MISSING_2")
        };

        assert_eq!(
            resolve_relay_url(&sources).as_deref(),
            Some("https://relay.example/webhook/site")
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }
}
