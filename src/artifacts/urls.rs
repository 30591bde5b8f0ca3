use crate::error::Result;
use crate::platform::PlatformInfo;

use super::config::ArtifactEndpoints;

/// Placeholder substituted with the OS token
pub const OS_PLACEHOLDER: &str = "{os}";

/// Latest wallet binary build, per OS
pub const LATEST_BINARY_URL_TEMPLATE: &str =
    "https://hydra.iohk.io/job/Cardano/cardano-wallet/cardano-wallet-{os}64/latest/download-by-type/file/binary-dist";

/// Latest finished node deployment configs
pub const LATEST_CONFIG_BASE_URL: &str =
    "https://hydra.iohk.io/job/Cardano/cardano-node/cardano-deployment/latest-finished/download/1";

/// URL of the latest wallet binary for `platform`
///
/// Fails with `UnsupportedPlatform` when the platform is not linux, macos
/// or windows.
pub fn latest_binary_url(platform: &PlatformInfo) -> Result<String> {
    ArtifactEndpoints::default().binary_url(platform)
}

/// Base URL of the latest node configuration files
pub fn latest_config_base_url() -> &'static str {
    LATEST_CONFIG_BASE_URL
}
