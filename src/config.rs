//! Layered configuration for the PizzaCraft client.
//!
//! Settings are resolved file → environment → CLI:
//! - `~/.pizzacraft/config.toml` (or `<data-dir>/config.toml`)
//! - `PIZZACRAFT_API_URL`, `PIZZACRAFT_PAYMENT_KEY`, `PIZZACRAFT_DATA_DIR`
//! - `--api-url` / `--data-dir` flags
//!
//! # Configuration File Format
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [payment]
//! key_id = "rzp_test_xxxxxxxx"
//! widget_url = "https://checkout.razorpay.com/v1/checkout"
//! timeout_secs = 300
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the PizzaCraft backend, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

/// `[payment]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Publishable key for the hosted payment widget.
    #[serde(default = "default_payment_key")]
    pub key_id: String,
    /// URL of the hosted payment page.
    #[serde(default = "default_widget_url")]
    pub widget_url: String,
    /// How long to wait for the widget callback before treating the
    /// attempt as cancelled.
    #[serde(default = "default_widget_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_payment_key() -> String {
    "rzp_test_placeholder".to_string()
}

fn default_widget_url() -> String {
    "https://checkout.razorpay.com/v1/checkout".to_string()
}

fn default_widget_timeout_secs() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: default_payment_key(),
            widget_url: default_widget_url(),
            timeout_secs: default_widget_timeout_secs(),
        }
    }
}

impl ConfigFile {
    /// Load the config file if it exists, otherwise return defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the config file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Runtime configuration, with all derived paths resolved.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub payment_key_id: String,
    pub widget_url: String,
    pub widget_timeout_secs: u64,
    pub data_dir: PathBuf,
    pub cart_file: PathBuf,
    pub session_file: PathBuf,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration from file, environment, and CLI overrides.
    pub fn load(
        data_dir: Option<PathBuf>,
        api_url: Option<String>,
        verbose: bool,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match std::env::var("PIZZACRAFT_DATA_DIR") {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => dirs::home_dir()
                    .context("Failed to resolve home directory")?
                    .join(".pizzacraft"),
            },
        };

        let file = ConfigFile::load(&data_dir.join("config.toml"))?;

        let resolved_api_url = api_url
            .or_else(|| std::env::var("PIZZACRAFT_API_URL").ok())
            .unwrap_or(file.api.base_url);
        let payment_key_id = std::env::var("PIZZACRAFT_PAYMENT_KEY")
            .ok()
            .unwrap_or(file.payment.key_id);

        let cart_file = data_dir.join("cart.json");
        let session_file = data_dir.join("session.json");
        let log_dir = data_dir.join("logs");

        Ok(Self {
            api_url: resolved_api_url,
            payment_key_id,
            widget_url: file.payment.widget_url,
            widget_timeout_secs: file.payment.timeout_secs,
            data_dir,
            cart_file,
            session_file,
            log_dir,
            verbose,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).context("Failed to create data directory")?;
        std::fs::create_dir_all(&self.log_dir).context("Failed to create log directory")?;
        Ok(())
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_config_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(dir.path().to_path_buf()), None, false).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.widget_timeout_secs, 300);
        assert_eq!(config.cart_file, dir.path().join("cart.json"));
        assert_eq!(config.session_file, dir.path().join("session.json"));
    }

    #[test]
    fn test_config_reads_file_values() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r#"
[api]
base_url = "https://api.pizzacraft.example/api"

[payment]
key_id = "rzp_live_abc"
timeout_secs = 120
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path().to_path_buf()), None, false).unwrap();
        assert_eq!(config.api_url, "https://api.pizzacraft.example/api");
        assert_eq!(config.payment_key_id, "rzp_live_abc");
        assert_eq!(config.widget_timeout_secs, 120);
        // Unset fields fall back to defaults
        assert_eq!(
            config.widget_url,
            "https://checkout.razorpay.com/v1/checkout"
        );
    }

    #[test]
    fn test_cli_override_wins_over_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[api]\nbase_url = \"http://from-file/api\"\n",
        )
        .unwrap();

        let config = Config::load(
            Some(dir.path().to_path_buf()),
            Some("http://from-cli/api".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(config.api_url, "http://from-cli/api");
    }

    #[test]
    fn test_config_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "[api\nbase_url = ").unwrap();
        let result = Config::load(Some(dir.path().to_path_buf()), None, false);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config file")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("store");
        let config = Config::load(Some(data_dir.clone()), None, false).unwrap();
        config.ensure_directories().unwrap();
        assert!(data_dir.exists());
        assert!(data_dir.join("logs").exists());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let file = ConfigFile::default();
        file.save(&path).unwrap();
        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.api.base_url, file.api.base_url);
        assert_eq!(loaded.payment.timeout_secs, file.payment.timeout_secs);
    }
}
