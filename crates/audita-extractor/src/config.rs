//! Configuration for the Auditor

use serde::{Deserialize, Serialize};

/// Characters scanned after a field label for its value
pub const DEFAULT_FIELD_WINDOW: usize = 100;

/// Leading pages searched for the patient profile
pub const DEFAULT_PROFILE_PAGES: usize = 2;

/// Largest accepted input (10 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Audits kept in the memoization cache
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Characters of context on each side of a search hit
pub const DEFAULT_SNIPPET_CHARS: usize = 40;

/// Configuration for the Auditor
///
/// The keyword tables are compile-time constants; only the scanning bounds
/// and resource limits live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Characters scanned after a field label for its value
    pub field_window: usize,

    /// Leading pages searched for name, birth date and identification
    pub profile_pages: usize,

    /// Largest accepted input in bytes
    pub max_input_bytes: usize,

    /// Number of audit results memoized by content digest (0 disables)
    pub cache_capacity: usize,

    /// Characters of context on each side of a search hit
    pub snippet_chars: usize,
}

impl AuditConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.field_window == 0 {
            return Err("field_window must be greater than 0".to_string());
        }
        if self.profile_pages == 0 {
            return Err("profile_pages must be greater than 0".to_string());
        }
        if self.max_input_bytes == 0 {
            return Err("max_input_bytes must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            field_window: DEFAULT_FIELD_WINDOW,
            profile_pages: DEFAULT_PROFILE_PAGES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}
