//! Generation orchestration: external path with template fallback

pub mod backend;
pub mod error;
pub mod orchestrator;
pub mod result;

pub use backend::GenerationBackend;
pub use error::GenerationError;
pub use orchestrator::Orchestrator;
pub use result::{GenerationResult, GenerationSource};
