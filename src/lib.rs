//! Stateless helpers for test suites and scripts: path normalization and
//! resolution, slug generation, string templates, ANSI colorization,
//! fixture lookup, and debug output.

/// Macro for section-prefixed debug logging, gated on a
/// [`debug::DebugFlags`] value.
///
/// Usage:
/// ```ignore
/// let flags = stagehand::debug::DebugFlags::from_env();
/// log_debug!(flags, "fixtures", "seeding {} records", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($flags:expr, $section:expr, $($arg:tt)*) => {
        if $flags.enabled() {
            println!(concat!("[", $section, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod color;
pub mod debug;
pub mod error;
pub mod fixtures;
pub mod path;
pub mod slug;
pub mod template;

pub use error::{Error, ErrorCode, Result};
