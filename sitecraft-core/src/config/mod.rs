//! sitecraft configuration module
//!
//! Loads and persists `sitecraft.toml`, resolves credentials against the
//! environment, and centralizes the constants used across the pipeline.

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{CredentialSources, load_dotenv, mask_secret};
pub use loader::{ConfigManager, GenerationConfig, ServiceConfig, ServiceSettings, SiteCraftConfig};
