use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Upper bound for a decoded attachment in bytes.
    #[serde(default = "default_max_attachment_bytes")]
    pub max_attachment_bytes: usize,
    /// Maximum number of analyses in flight at once; further requests are
    /// refused rather than queued.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_attachment_bytes: default_max_attachment_bytes(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Office inbox contact inquiries are composed for.
    pub recipient: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_max_attachment_bytes() -> usize {
    crate::attachment::DEFAULT_MAX_ATTACHMENT_BYTES
}

fn default_max_concurrent() -> usize {
    1
}

/// Load configuration from a file plus `RISTIC_API__*` environment
/// overrides, then validate it.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("RISTIC_API").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }

    if cfg.gemini.api_key.trim().is_empty() {
        anyhow::bail!("gemini.api_key must be configured");
    }

    if cfg.gemini.timeout_seconds == 0 {
        anyhow::bail!("gemini.timeout_seconds must be positive");
    }

    if cfg.analysis.max_concurrent == 0 {
        anyhow::bail!("analysis.max_concurrent must be at least 1");
    }

    if cfg.analysis.max_attachment_bytes == 0 {
        anyhow::bail!("analysis.max_attachment_bytes must be positive");
    }

    if !cfg.contact.recipient.contains('@') {
        anyhow::bail!(
            "contact.recipient does not look like an email address: {}",
            cfg.contact.recipient
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            gemini: GeminiConfig {
                api_key: "test-key".to_string(),
                base_url: default_gemini_base_url(),
                model: default_gemini_model(),
                timeout_seconds: 60,
            },
            analysis: AnalysisConfig::default(),
            contact: ContactConfig {
                recipient: "office@akristic.rs".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_config_ok() {
        assert!(validate_config(&create_test_config()).is_ok());
    }

    #[test]
    fn test_validate_config_requires_api_key() {
        let mut cfg = create_test_config();
        cfg.gemini.api_key = "  ".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("gemini.api_key must be configured"));
    }

    #[test]
    fn test_validate_config_rejects_zero_concurrency() {
        let mut cfg = create_test_config();
        cfg.analysis.max_concurrent = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_bad_recipient() {
        let mut cfg = create_test_config();
        cfg.contact.recipient = "not-an-email".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_analysis_defaults() {
        let defaults = AnalysisConfig::default();
        assert_eq!(defaults.max_attachment_bytes, 20 * 1024 * 1024);
        assert_eq!(defaults.max_concurrent, 1);
    }
}
