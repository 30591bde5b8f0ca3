/**
 * Downloads Module
 *
 * Fetches test artifacts over HTTP into local files.
 */

mod downloader;

pub use downloader::*;
