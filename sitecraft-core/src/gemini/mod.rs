//! Direct client for the Gemini `generateContent` API
//!
//! Split into HTTP client configuration (`client::config`), the wire models
//! (`models`) and the request/response handling (`client`).

pub mod client;
pub mod models;

pub use client::{Client, ClientConfig};
pub use models::{Content, GenerateContentRequest, GenerationConfig, Part};
