//! Build-time configuration for the landing screen.
//!
//! Values are baked into the WASM bundle through `option_env!`, so overriding
//! them means rebuilding with e.g. `EDUPATH_ASSET_BASE=https://cdn.example/ trunk build`.

use thiserror::Error;

pub const DEFAULT_PRODUCT_NAME: &str = "EduPath";
pub const DEFAULT_ASSET_BASE: &str = "/";
pub const DEFAULT_ASSET_EXTENSION: &str = "svg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("product name must not be blank")]
    EmptyProductName,

    #[error("asset base {0:?} must start with '/', 'http://' or 'https://' and end with '/'")]
    InvalidAssetBase(String),

    #[error("asset extension {0:?} must be non-empty ASCII alphanumerics")]
    InvalidAssetExtension(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    pub product_name: String,
    pub asset_base: String,
    pub asset_extension: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            asset_extension: DEFAULT_ASSET_EXTENSION.to_string(),
        }
    }
}

impl LandingConfig {
    /// Build a config from optional overrides. `None` keeps the default.
    pub fn from_vars(
        product_name: Option<&str>,
        asset_base: Option<&str>,
        asset_extension: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let product_name = match product_name {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyProductName),
            Some(name) => name.trim().to_string(),
            None => defaults.product_name,
        };

        let asset_base = match asset_base {
            Some(base) if !is_valid_asset_base(base) => {
                return Err(ConfigError::InvalidAssetBase(base.to_string()));
            }
            Some(base) => base.to_string(),
            None => defaults.asset_base,
        };

        let asset_extension = match asset_extension {
            Some(ext) => {
                let ext = ext.trim_start_matches('.');
                if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(ConfigError::InvalidAssetExtension(ext.to_string()));
                }
                ext.to_string()
            }
            None => defaults.asset_extension,
        };

        Ok(Self {
            product_name,
            asset_base,
            asset_extension,
        })
    }

    /// Config from `EDUPATH_*` variables captured at compile time.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    pub fn from_build_env() -> Self {
        match Self::from_vars(
            option_env!("EDUPATH_PRODUCT_NAME"),
            option_env!("EDUPATH_ASSET_BASE"),
            option_env!("EDUPATH_ASSET_EXTENSION"),
        ) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid build-time landing config, using defaults: {err}");
                Self::default()
            }
        }
    }
}

fn is_valid_asset_base(base: &str) -> bool {
    let scheme_ok =
        base.starts_with('/') || base.starts_with("http://") || base.starts_with("https://");
    scheme_ok && base.ends_with('/')
}
