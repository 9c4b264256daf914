/// Model ID constants for the direct generative-text call
pub mod models {
    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "gemini-1.5-flash",
            "gemini-1.5-pro",
            "gemini-2.5-flash",
            "gemini-2.5-pro",
        ];
    }
}

/// Endpoint constants
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Path segment used by relay test endpoints; these only answer while an
    /// editor session is listening and fail in normal use.
    pub const RELAY_TEST_PATH_SEGMENT: &str = "/webhook-test/";
    pub const RELAY_PRODUCTION_PATH_SEGMENT: &str = "/webhook/";
    /// Style library referenced by every generated document
    pub const STYLE_LIBRARY: &str = "https://cdn.tailwindcss.com";
}

/// Environment variable names
pub mod env {
    pub const API_KEY: &str = "SITECRAFT_API_KEY";
    pub const API_KEY_FALLBACKS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];
    pub const RELAY_URL: &str = "SITECRAFT_RELAY_URL";
}

/// Default values
pub mod defaults {
    pub const CONFIG_FILE_NAME: &str = "sitecraft.toml";
    pub const CONFIG_DIR_NAME: &str = ".sitecraft";
    pub const DEFAULT_THEME: &str = "portfolio";
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const USER_AGENT: &str = concat!("sitecraft/", env!("CARGO_PKG_VERSION"));
}

/// Generation request tuning for the direct call
pub mod generation {
    pub const TEMPERATURE: f32 = 0.3;
    pub const TOP_K: u32 = 20;
    pub const TOP_P: f32 = 0.8;
    pub const MAX_OUTPUT_TOKENS: u32 = 8192;
}

/// Markup pipeline limits
pub mod markup {
    /// Minimum accepted document length, in characters
    pub const MIN_DOCUMENT_CHARS: usize = 200;
    /// Maximum hero title length, in characters, before truncation
    pub const HERO_TITLE_MAX_CHARS: usize = 60;
    pub const ELLIPSIS: &str = "...";
    /// Error bodies are clipped to these many characters in messages
    pub const RELAY_ERROR_SNIPPET_CHARS: usize = 150;
    pub const SERVICE_ERROR_SNIPPET_CHARS: usize = 200;
}
