/**
 * Platform Module
 *
 * Host platform detection. The platform string is passed in explicitly so
 * platform-dependent helpers can be exercised for any OS from any host.
 */
mod detect;

pub use detect::*;
