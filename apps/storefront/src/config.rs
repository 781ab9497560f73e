//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     EBOOK_STORE_NAME="Corner Books"                                     │
//! │     EBOOK_ALLOW_EMPTY_CHECKOUT=false                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     --config <path>, or the platform config dir:                        │
//! │     ~/.config/storefront/storefront.toml (Linux)                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Books"
//!
//! [checkout]
//! max_item_quantity = 999
//! max_cart_items = 100
//! allow_empty_checkout = true
//! ```
//!
//! The sales tax rate is fixed in ebook-core and has no setting here.

use std::path::PathBuf;

use ebook_core::StorePolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Store identity printed above invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Ebook Store".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Root Configuration
// =============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,

    /// Cart limits and empty-checkout switch handed to every account.
    #[serde(default)]
    pub checkout: StorePolicy,
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(AppError::InvalidConfig("store.name must not be empty".into()));
        }

        if self.checkout.max_item_quantity < 1 {
            return Err(AppError::InvalidConfig(
                "checkout.max_item_quantity must be at least 1".into(),
            ));
        }

        if self.checkout.max_cart_items == 0 {
            return Err(AppError::InvalidConfig(
                "checkout.max_cart_items must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `EBOOK_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("EBOOK_STORE_NAME") {
            debug!(name = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Some(qty) = lookup("EBOOK_MAX_ITEM_QUANTITY") {
            match qty.parse::<i64>() {
                Ok(q) => self.checkout.max_item_quantity = q,
                Err(_) => warn!(value = %qty, "Ignoring invalid EBOOK_MAX_ITEM_QUANTITY"),
            }
        }

        if let Some(items) = lookup("EBOOK_MAX_CART_ITEMS") {
            match items.parse::<usize>() {
                Ok(n) => self.checkout.max_cart_items = n,
                Err(_) => warn!(value = %items, "Ignoring invalid EBOOK_MAX_CART_ITEMS"),
            }
        }

        if let Some(allow) = lookup("EBOOK_ALLOW_EMPTY_CHECKOUT") {
            match allow.to_lowercase().as_str() {
                "true" | "1" | "yes" => self.checkout.allow_empty_checkout = true,
                "false" | "0" | "no" => self.checkout.allow_empty_checkout = false,
                _ => warn!(value = %allow, "Ignoring invalid EBOOK_ALLOW_EMPTY_CHECKOUT"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ebook", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.store.name, "Ebook Store");
        assert_eq!(config.checkout.max_item_quantity, 999);
        assert!(config.checkout.allow_empty_checkout);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: StoreConfig = toml::from_str(
            r#"
            [checkout]
            allow_empty_checkout = false
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Ebook Store");
        assert_eq!(config.checkout.max_cart_items, 100);
        assert!(!config.checkout.allow_empty_checkout);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nname = \"Corner Books\"\n\n[checkout]\nmax_item_quantity = 5").unwrap();

        let config = StoreConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.checkout.max_item_quantity, 5);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.checkout.max_cart_items, 100);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[checkout]\nmax_item_quantity = \"lots\"").unwrap();

        let result = StoreConfig::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(AppError::ConfigLoad(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StoreConfig::default();
        config.apply_overrides(lookup_from(&[
            ("EBOOK_STORE_NAME", "Corner Books"),
            ("EBOOK_MAX_ITEM_QUANTITY", "12"),
            ("EBOOK_MAX_CART_ITEMS", "not-a-number"),
            ("EBOOK_ALLOW_EMPTY_CHECKOUT", "no"),
        ]));

        assert_eq!(config.store.name, "Corner Books");
        assert_eq!(config.checkout.max_item_quantity, 12);
        assert_eq!(config.checkout.max_cart_items, 100);
        assert!(!config.checkout.allow_empty_checkout);
    }

    #[test]
    fn test_config_validation() {
        let mut config = StoreConfig::default();

        config.store.name = "  ".to_string();
        assert!(config.validate().is_err());

        config.store.name = "Corner Books".to_string();
        config.checkout.max_item_quantity = 0;
        assert!(config.validate().is_err());

        config.checkout.max_item_quantity = 10;
        config.checkout.max_cart_items = 0;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = StoreConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[checkout]"));
        assert!(toml_str.contains("allow_empty_checkout = true"));
    }
}
