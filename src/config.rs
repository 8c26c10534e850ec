//! Configuration types for the mediator.

use serde::{Deserialize, Serialize};

/// Main configuration for the transform mediator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediatorConfig {
    /// Configuration version
    pub version: String,
    /// Global settings
    pub settings: Settings,
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            settings: Settings::default(),
        }
    }
}

/// Global settings.
///
/// The wire schemas themselves (element names, namespaces) are fixed for
/// compatibility and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Require the expected root element on the source document and fail
    /// with a schema mismatch otherwise. When disabled, only the extracted
    /// field has to be present, whatever the wrapper element is.
    pub strict_root: bool,
    /// Log source and target documents at debug level.
    pub log_payloads: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict_root: true,
            log_payloads: false,
        }
    }
}
