//! Debug-flag detection and gated debug output.
//!
//! Debug state is captured once at startup ([`DebugFlags::from_env`]) and
//! passed explicitly to consumers; there is no hidden global cache.

use serde::Serialize;
use std::env;

const DEBUG_TOKENS: [&str; 3] = ["--debug", "--verbose", "-vvv"];

/// Whether the process was launched with a debug-indicating flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugFlags {
    enabled: bool,
}

impl DebugFlags {
    /// Capture the flags from the process invocation arguments.
    pub fn from_env() -> Self {
        Self::from_args(env::args())
    }

    /// Capture the flags from an explicit argument list.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let enabled = args
            .into_iter()
            .any(|arg| DEBUG_TOKENS.contains(&arg.as_ref()));
        Self { enabled }
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Print a debug message to stdout, prefixed with its section.
///
/// No-op unless `flags` is enabled.
pub fn print(flags: &DebugFlags, message: &str, section: Option<&str>) {
    if !flags.enabled() {
        return;
    }

    match section {
        Some(section) => println!("[{}] {}", section, message),
        None => println!("{}", message),
    }
}

/// Print a serializable value as JSON, prefixed with its section.
pub fn print_value<T: Serialize>(flags: &DebugFlags, value: &T, section: Option<&str>) {
    if !flags.enabled() {
        return;
    }

    let encoded = serde_json::to_string(value).unwrap_or_else(|_| String::from("null"));
    print(flags, &encoded, section);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_each_debug_token() {
        for token in ["--debug", "--verbose", "-vvv"] {
            let flags = DebugFlags::from_args(["prog", token]);
            assert!(flags.enabled(), "token {} not recognized", token);
        }
    }

    #[test]
    fn ignores_lookalike_arguments() {
        let flags = DebugFlags::from_args(["prog", "--debugger", "-vv", "verbose"]);
        assert!(!flags.enabled());
    }

    #[test]
    fn empty_argument_list_is_disabled() {
        let flags = DebugFlags::from_args(Vec::<String>::new());
        assert!(!flags.enabled());
        assert!(!DebugFlags::default().enabled());
    }

    #[test]
    fn disabled_flags_suppress_output_paths() {
        let flags = DebugFlags::default();
        print(&flags, "never shown", Some("quiet"));
        print_value(&flags, &vec![1, 2, 3], None);
        crate::log_debug!(flags, "quiet", "skipped {}", 1);
    }
}
