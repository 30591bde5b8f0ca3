/**
 * Artifacts Module
 *
 * Locations of the latest wallet binaries and node deployment configs on
 * the CI artifact server.
 */
mod config;
mod urls;

pub use config::*;
pub use urls::*;
