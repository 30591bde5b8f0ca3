/**
 * Platform Detection
 *
 * Matches a platform string such as `x86_64-linux` or `arm64-darwin21`
 * against fixed patterns for the three supported OS families.
 */
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// OS families artifacts are published for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOs,
    Win,
}

impl Os {
    /// Token used in artifact URLs
    pub fn token(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Win => "win",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

fn windows_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"cygwin|mswin|mingw|bccwin|wince|emx|windows").expect("valid pattern")
    })
}

fn linux_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"linux").expect("valid pattern"))
}

fn mac_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"darwin|macos").expect("valid pattern"))
}

/// A host platform identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    platform: String,
}

impl PlatformInfo {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }

    /// `<arch>-<os>` of the build target, e.g. `x86_64-linux`
    pub fn current() -> Self {
        Self::new(format!(
            "{}-{}",
            std::env::consts::ARCH,
            std::env::consts::OS
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.platform
    }

    pub fn is_windows(&self) -> bool {
        windows_pattern().is_match(&self.platform)
    }

    pub fn is_linux(&self) -> bool {
        linux_pattern().is_match(&self.platform)
    }

    pub fn is_mac(&self) -> bool {
        mac_pattern().is_match(&self.platform)
    }

    /// OS family, or `None` when no pattern matched
    ///
    /// Checked in the order linux, macos, win with later matches winning.
    pub fn os(&self) -> Option<Os> {
        let mut os = None;
        if self.is_linux() {
            os = Some(Os::Linux);
        }
        if self.is_mac() {
            os = Some(Os::MacOs);
        }
        if self.is_windows() {
            os = Some(Os::Win);
        }
        os
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.platform)
    }
}
