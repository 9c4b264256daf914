use crate::config::api_keys::{self, CredentialSources};
use crate::config::constants::{defaults, models, urls};
use crate::gemini::ClientConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// External service settings; the persisted half of the credential store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Credential for the generative-text service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Optional relay endpoint; when absent the service is called directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_url: Option<String>,

    /// Model used for the direct call
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the direct call
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_model() -> String {
    models::google::DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    urls::GEMINI_API_BASE.to_string()
}
fn default_request_timeout() -> u64 {
    defaults::REQUEST_TIMEOUT_SECS
}
fn default_connect_timeout() -> u64 {
    defaults::CONNECT_TIMEOUT_SECS
}
fn default_theme() -> String {
    defaults::DEFAULT_THEME.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            relay_url: None,
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// Generation defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Theme used when the caller does not name one
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
        }
    }
}

/// Main configuration structure, stored as `sitecraft.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteCraftConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Fully resolved settings handed to the orchestrator.
///
/// Built once per process from the config file and the environment; the
/// pipeline never reads ambient state itself.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub api_key: Option<String>,
    pub relay_url: Option<String>,
    pub model: String,
    pub base_url: String,
    pub client: ClientConfig,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::from_service_config(&ServiceConfig::default(), None, None)
    }
}

impl ServiceSettings {
    fn from_service_config(
        service: &ServiceConfig,
        api_key: Option<String>,
        relay_url: Option<String>,
    ) -> Self {
        let client = ClientConfig {
            request_timeout: Duration::from_secs(service.request_timeout_secs),
            connect_timeout: Duration::from_secs(service.connect_timeout_secs),
            ..ClientConfig::default()
        };
        Self {
            api_key,
            relay_url,
            model: service.model.clone(),
            base_url: service.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Template-only settings, with no credential
    pub fn template_only() -> Self {
        Self::default()
    }

    /// Settings that call the service directly at `base_url`
    pub fn direct(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Settings that go through a relay endpoint
    pub fn relay(api_key: impl Into<String>, relay_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            relay_url: Some(relay_url.into()),
            ..Self::default()
        }
    }
}

/// Configuration manager for loading and persisting configuration
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: SiteCraftConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Path used when saving without a previously loaded file
    pub fn default_save_path() -> Option<PathBuf> {
        Self::get_home_dir().map(|home| {
            home.join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME)
        })
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let config_path = workspace.join(defaults::CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }

        let fallback_path = workspace
            .join(defaults::CONFIG_DIR_NAME)
            .join(defaults::CONFIG_FILE_NAME);
        if fallback_path.exists() {
            return Self::load_from_file(&fallback_path);
        }

        if let Some(home_config_path) = Self::default_save_path() {
            if home_config_path.exists() {
                return Self::load_from_file(&home_config_path);
            }
        }

        debug!("no configuration file found; using defaults");
        Ok(Self {
            config: SiteCraftConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SiteCraftConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory configuration that has no backing file yet
    pub fn from_config(config: SiteCraftConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &SiteCraftConfig {
        &self.config
    }

    /// Mutable access for the credential-store commands
    pub fn config_mut(&mut self) -> &mut SiteCraftConfig {
        &mut self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Persist the configuration, to the file it came from or the home location.
    ///
    /// Returns the path written.
    pub fn save(&mut self) -> Result<PathBuf> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => Self::default_save_path()
                .context("Cannot determine a home directory to store configuration")?,
        };
        self.save_to(&path)?;
        self.config_path = Some(path.clone());
        Ok(path)
    }

    /// Persist the configuration to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = toml::to_string_pretty(&self.config)
            .context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Resolve credentials against the environment and produce pipeline settings
    pub fn service_settings(&self) -> ServiceSettings {
        let service = &self.config.service;
        let sources = CredentialSources {
            api_key_config: service.api_key.clone(),
            relay_url_config: service.relay_url.clone(),
            ..CredentialSources::default()
        };
        ServiceSettings::from_service_config(
            service,
            api_keys::resolve_api_key(&sources),
            api_keys::resolve_relay_url(&sources),
        )
    }

    /// Create a sample configuration file
    pub fn create_sample_config(output: impl AsRef<Path>, force: bool) -> Result<bool> {
        let output = output.as_ref();
        if output.exists() && !force {
            return Ok(false);
        }
        Self::from_config(SiteCraftConfig::default(), None).save_to(output)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: SiteCraftConfig = toml::from_str("[service]\napi_key = \"abc\"\n").unwrap();
        assert_eq!(config.service.api_key.as_deref(), Some("abc"));
        assert_eq!(config.service.model, models::google::DEFAULT_MODEL);
        assert_eq!(config.service.base_url, urls::GEMINI_API_BASE);
        assert_eq!(config.generation.default_theme, "portfolio");
    }

    #[test]
    fn test_load_from_workspace_prefers_root_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("sitecraft.toml"),
            "[generation]\ndefault_theme = \"tech\"\n",
        )
        .unwrap();
        fs::create_dir_all(temp.path().join(".sitecraft")).unwrap();
        fs::write(
            temp.path().join(".sitecraft").join("sitecraft.toml"),
            "[generation]\ndefault_theme = \"blog\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(temp.path()).unwrap();
        assert_eq!(manager.config().generation.default_theme, "tech");
        assert_eq!(
            manager.config_path(),
            Some(temp.path().join("sitecraft.toml").as_path())
        );
    }

    #[test]
    fn test_save_round_trips_credentials() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("sitecraft.toml");

        let mut manager =
            ConfigManager::from_config(SiteCraftConfig::default(), Some(path.clone()));
        manager.config_mut().service.api_key = Some("secret-key".to_string());
        manager.config_mut().service.relay_url =
            Some("https://relay.example/webhook/x".to_string());
        let written = manager.save().unwrap();
        assert_eq!(written, path);

        let reloaded = ConfigManager::load_from_file(&path).unwrap();
        assert_eq!(reloaded.config().service.api_key.as_deref(), Some("secret-key"));
        assert_eq!(
            reloaded.config().service.relay_url.as_deref(),
            Some("https://relay.example/webhook/x")
        );
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitecraft.toml");
        fs::write(&path, "[service\nmodel = ").unwrap();

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_sample_config_respects_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitecraft.toml");
        assert!(ConfigManager::create_sample_config(&path, false).unwrap());
        assert!(!ConfigManager::create_sample_config(&path, false).unwrap());
        assert!(ConfigManager::create_sample_config(&path, true).unwrap());
    }

    #[test]
    fn test_settings_constructors() {
        let direct = ServiceSettings::direct("k", "http://localhost:1234");
        assert_eq!(direct.api_key.as_deref(), Some("k"));
        assert!(direct.relay_url.is_none());

        let relay = ServiceSettings::relay("k", "http://localhost/webhook/a");
        assert_eq!(relay.relay_url.as_deref(), Some("http://localhost/webhook/a"));

        assert!(ServiceSettings::template_only().api_key.is_none());
    }
}
