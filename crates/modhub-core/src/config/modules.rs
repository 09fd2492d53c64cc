//! Module discovery configuration.

use serde::{Deserialize, Serialize};

/// Module discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Directory containing module packages (shared libraries).
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Whether to automatically discover modules on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            auto_load: default_true(),
        }
    }
}

fn default_directory() -> String {
    "./modules".to_string()
}

fn default_true() -> bool {
    true
}
