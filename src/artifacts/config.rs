/**
 * Endpoint Configuration
 *
 * The artifact server URLs default to fixed constants and can be pointed
 * elsewhere (a mirror, a local fixture server) from a TOML file:
 *
 * ```toml
 * binary_url_template = "http://localhost:8080/wallet-{os}64/binary-dist"
 * config_base_url = "http://localhost:8080/configs"
 * ```
 */
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::urls::{LATEST_BINARY_URL_TEMPLATE, LATEST_CONFIG_BASE_URL, OS_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::platform::PlatformInfo;

/// Artifact server endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactEndpoints {
    /// Binary download URL containing an `{os}` placeholder
    pub binary_url_template: String,
    /// Config download base URL
    pub config_base_url: String,
}

impl Default for ArtifactEndpoints {
    fn default() -> Self {
        Self {
            binary_url_template: LATEST_BINARY_URL_TEMPLATE.to_string(),
            config_base_url: LATEST_CONFIG_BASE_URL.to_string(),
        }
    }
}

impl ArtifactEndpoints {
    /// Parse endpoints from TOML; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let endpoints: Self = toml::from_str(s)?;
        endpoints.validate()?;
        Ok(endpoints)
    }

    /// Load endpoints from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        log::debug!("[Artifacts] Loading endpoints from {:?}", path);
        Self::from_toml_str(&content)
    }

    /// Render as TOML, e.g. to seed a config file for a test environment
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if !self.binary_url_template.contains(OS_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "binary_url_template must contain {}: {}",
                OS_PLACEHOLDER, self.binary_url_template
            )));
        }
        Ok(())
    }

    /// Binary URL for `platform`
    pub fn binary_url(&self, platform: &PlatformInfo) -> Result<String> {
        let os = platform
            .os()
            .ok_or_else(|| Error::UnsupportedPlatform(platform.to_string()))?;
        Ok(self.binary_url_template.replace(OS_PLACEHOLDER, os.token()))
    }

    pub fn config_base_url(&self) -> &str {
        &self.config_base_url
    }
}
