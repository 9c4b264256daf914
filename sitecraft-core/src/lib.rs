//! # sitecraft-core - website synthesis pipeline
//!
//! `sitecraft-core` turns a free-text description and a theme name into a
//! complete, renderable HTML page. It can ask an external generative service
//! for the page and always falls back to a deterministic rule-based template
//! when that path is unavailable or returns something unusable.
//!
//! ## Architecture Overview
//!
//! - `template/`: prompt analysis, section builders and document composition.
//! - `markup/`: payload extraction, normalization and validation of service
//!   output.
//! - `gemini/`: direct client for the `generateContent` API.
//! - `relay/`: client for an optional intermediary relay.
//! - `prompts/`: instructions sent with the direct call.
//! - `generation/`: the orchestrator, its error taxonomy and result type.
//! - `diagnostics/`: relay and credential health checks.
//! - `export/`: `.tar.gz` packaging of a generated page.
//! - `config/`: `sitecraft.toml` loading, credential resolution, constants.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use sitecraft_core::{ConfigManager, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let manager = ConfigManager::load()?;
//!     let orchestrator = Orchestrator::from_settings(&manager.service_settings());
//!     let prompt = "A bakery with pricing and a contact form";
//!     let result = orchestrator.generate(prompt, "ecommerce").await;
//!     for warning in &result.warnings {
//!         eprintln!("{warning}");
//!     }
//!     println!("{}", result.html);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod export;
pub mod gemini;
pub mod generation;
pub mod markup;
pub mod prompts;
pub mod relay;
pub mod template;

pub use config::{ConfigManager, ServiceSettings, SiteCraftConfig};
pub use generation::{
    GenerationBackend, GenerationError, GenerationResult, GenerationSource, Orchestrator,
};
pub use markup::MarkupError;
pub use template::{TemplateConfig, ThemeId, analyze, compose, generate_from_template};
