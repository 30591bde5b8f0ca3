/**
 * Blocking Downloader
 *
 * Issues a GET, writes whatever body comes back to disk and reports the
 * status code. Error statuses are not treated specially: the caller reads
 * the status from the log line or the returned outcome.
 */
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use reqwest::Url;

use crate::error::{Error, Result};

/// Result of a completed download
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub url: String,
    pub path: PathBuf,
    pub status: StatusCode,
    pub bytes: u64,
}

impl DownloadOutcome {
    /// `<url> -> <status code>`
    pub fn log_line(&self) -> String {
        format!("{} -> {}", self.url, self.status.as_u16())
    }
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.log_line())
    }
}

/// HTTP downloader sharing one connection pool across calls
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    /// Client without a request timeout; a download blocks until the body is complete
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxies, headers, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Download `url` into `dest`, or into the URL's last path segment
    pub fn download(&self, url: &str, dest: Option<&Path>) -> Result<DownloadOutcome> {
        let path = match dest {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(file_name_from_url(url)?),
        };

        log::debug!("[Downloader] GET {} -> {:?}", url, path);

        let mut response = self.client.get(url).send().map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();

        let file = std::fs::File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut sink = WriteTracker::new(file);
        let bytes = match response.copy_to(&mut sink) {
            Ok(n) => n,
            Err(source) => {
                return Err(match sink.take_error() {
                    Some(e) => Error::io(&path, e),
                    None => Error::Network {
                        url: url.to_string(),
                        source,
                    },
                })
            }
        };
        sink.flush().map_err(|e| Error::io(&path, e))?;

        let outcome = DownloadOutcome {
            url: url.to_string(),
            path,
            status,
            bytes,
        };

        // Printed line is exactly `log_line()`, which the tests check
        println!("[Downloader] {}", outcome.log_line());
        if !status.is_success() {
            log::warn!("[Downloader] {} answered {}, body written anyway", url, status);
        }

        Ok(outcome)
    }
}

/// Writer that remembers its own I/O failure
///
/// `copy_to` folds read and write failures into one `reqwest::Error`; the
/// remembered error tells a failed file write apart from a broken body.
struct WriteTracker<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteTracker<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> Write for WriteTracker<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.write(buf) {
            // Retried by the copy loop
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(e),
            Err(e) => {
                let kind = e.kind();
                self.error = Some(e);
                Err(io::Error::new(kind, "write to destination failed"))
            }
            ok => ok,
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Download with a default client
pub fn download(url: &str, dest: Option<&Path>) -> Result<DownloadOutcome> {
    Downloader::new()?.download(url, dest)
}

/// Last non-empty path segment of `url`
///
/// A URL with no path (`https://example.com/`) has no file name and is an
/// error; the host is never used as a fallback name.
pub fn file_name_from_url(url: &str) -> Result<String> {
    let no_name = || Error::NoFileName(url.to_string());

    let parsed = Url::parse(url).map_err(|_| no_name())?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(no_name)
}
