/**
 * Paths Module
 *
 * Scratch directory setup and cleanup for test runs.
 */
mod dirs;

pub use dirs::*;
