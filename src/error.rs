/**
 * Error Module
 *
 * Single error type shared by every helper in the crate.
 */
use std::path::PathBuf;

/// Errors raised by the e2e helpers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mnemonic word count outside {9, 12, 15, 18, 21, 24}
    #[error("non-supported number of words: {0}")]
    UnsupportedWordCount(usize),

    /// Entropy that cannot be encoded as a mnemonic
    #[error("invalid entropy length: {0} bytes (expected 12..=32 in steps of 4)")]
    InvalidEntropyLength(usize),

    /// No destination file name could be derived from the URL
    #[error("cannot derive a file name from {0}")]
    NoFileName(String),

    /// Transport failure while talking to the remote server
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Filesystem failure
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Host platform matched none of linux/macos/win
    #[error("unrecognized platform: {0}")]
    UnsupportedPlatform(String),

    /// Invalid endpoint configuration
    #[error("invalid endpoint config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
