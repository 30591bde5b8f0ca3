// 錯誤類型
mod error;
// BIP-39 助記詞生成
pub mod mnemonic;
// HTTP 文件下載
pub mod downloads;
// 目錄建立與清理
pub mod paths;
// 平台檢測
pub mod platform;
// 最新構建產物 URL
pub mod artifacts;

pub use artifacts::{latest_binary_url, latest_config_base_url, ArtifactEndpoints};
pub use downloads::{download, DownloadOutcome, Downloader};
pub use error::{Error, Result};
pub use mnemonic::{mnemonic_sentence, DEFAULT_WORD_COUNT};
pub use paths::{clear_directory, ensure_directory};
pub use platform::{Os, PlatformInfo};
