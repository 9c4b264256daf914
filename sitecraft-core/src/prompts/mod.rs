pub mod system;

pub use system::{credential_probe_request, generation_request, system_instruction, user_prompt};
