//! Test-fixture path lookup.
//!
//! Resolves fixture files relative to a test data root (`TEST_ROOT_DIR`, or
//! `tests/` under the working directory) and a vendor root
//! (`VENDOR_ROOT_DIR`, or `vendor/` under the working directory). A missing
//! root or unresolvable fixture is a hard error; callers are expected to
//! halt rather than continue with an undefined path.

use crate::error::{Error, Result};
use crate::path;
use std::env;

pub const TEST_ROOT_ENV: &str = "TEST_ROOT_DIR";
pub const VENDOR_ROOT_ENV: &str = "VENDOR_ROOT_DIR";

/// Absolute path to a file or directory under the test `_data` directory.
pub fn data(fixture_path: &str) -> Result<String> {
    let root = root_dir(TEST_ROOT_ENV, "tests")?;
    locate(
        &path::join(&[root.as_str(), "_data", fixture_path]),
        fixture_path,
        TEST_ROOT_ENV,
    )
}

/// Absolute path to a file or directory under the vendor directory.
pub fn vendor(fixture_path: &str) -> Result<String> {
    let root = root_dir(VENDOR_ROOT_ENV, "vendor")?;
    locate(
        &path::join(&[root.as_str(), fixture_path]),
        fixture_path,
        VENDOR_ROOT_ENV,
    )
}

fn root_dir(env_key: &str, default_dir: &str) -> Result<String> {
    if let Ok(value) = env::var(env_key) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    let cwd = env::current_dir().map_err(|_| {
        Error::env_missing_var(vec![env_key.to_string()]).with_hint(format!(
            "Set {} or run from a directory containing {}/",
            env_key, default_dir
        ))
    })?;

    Ok(path::join(&[cwd.to_string_lossy().as_ref(), default_dir]))
}

fn locate(candidate: &str, fixture_path: &str, env_key: &str) -> Result<String> {
    path::resolve(&path::normalize(candidate), None).ok_or_else(|| {
        Error::fixture_not_found(fixture_path, env_key)
            .with_hint(format!("Is the {} environment variable defined?", env_key))
    })
}
