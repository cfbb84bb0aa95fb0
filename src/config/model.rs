//! Typed configuration model with serde defaults.
//!
//! Everything here is optional on disk; a missing file or section falls back
//! to the defaults below. The provider credential is deliberately NOT part of
//! this file — it comes from the environment at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Model for the grounded trending-topic call.
    pub topic_model: String,
    /// Model for the structured concept brief.
    pub concept_model: String,
    /// Model for logo image generation.
    pub image_model: String,
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            topic_model: "gemini-2.5-flash".to_string(),
            concept_model: "gemini-2.5-pro".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where exported PDFs land. Defaults to the user's download directory.
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            dirs::download_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Log directory. Defaults to the platform data dir.
    pub log_dir: Option<PathBuf>,
    /// Default tracing filter, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enabled: true, log_dir: None, filter: "briefsmith=info".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider.topic_model, "gemini-2.5-flash");
        assert_eq!(config.provider.request_timeout_secs, 120);
        assert!(config.export.output_dir.is_none());
        assert!(config.logging.enabled);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            "[provider]\ntopic_model = \"gemini-2.0-flash\"\n\n[export]\noutput_dir = \"/tmp/briefs\"\n",
        )
        .unwrap();
        assert_eq!(config.provider.topic_model, "gemini-2.0-flash");
        assert_eq!(config.provider.concept_model, "gemini-2.5-pro");
        assert_eq!(config.export.resolve_output_dir(), PathBuf::from("/tmp/briefs"));
    }
}
