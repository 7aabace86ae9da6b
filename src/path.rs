//! Path string manipulation and filesystem-backed resolution.
//!
//! All transforms produce `/`-separated path strings regardless of the
//! separators found in the input. The search and resolution functions query
//! the filesystem directly and report misses as `None`; only missing
//! environment signals (see [`home`]) are reported as errors.

use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Normalize a path to single forward-slash separators.
///
/// Every run of `/` or `\` characters collapses to one `/`. A leading
/// separator is preserved, and the empty string maps to itself. Idempotent.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_was_separator = false;

    for ch in path.chars() {
        if ch == '/' || ch == '\\' {
            if !prev_was_separator {
                out.push('/');
            }
            prev_was_separator = true;
        } else {
            out.push(ch);
            prev_was_separator = false;
        }
    }

    out
}

/// Join path fragments into one normalized path.
///
/// The first fragment keeps a possible leading separator (absolute roots,
/// drive letters) and only loses trailing separators; every later fragment
/// is trimmed on both sides so the join point never doubles up. Joining no
/// fragments yields the empty string.
pub fn join(frags: &[&str]) -> String {
    let mut parts = Vec::with_capacity(frags.len());

    for (index, frag) in frags.iter().enumerate() {
        let trimmed = if index == 0 {
            frag.trim_end_matches(['/', '\\'])
        } else {
            frag.trim_matches(['/', '\\'])
        };
        parts.push(normalize(trimmed));
    }

    parts.join("/").replace('\\', "/")
}

/// Strip every trailing `/` or `\` from a path.
pub fn untrailslashit(path: &str) -> String {
    path.trim_end_matches(['/', '\\']).to_string()
}

/// Return the last `length` segments of a path, in original order.
///
/// A `length` of 0 falls back to 2. When the path holds fewer segments than
/// requested, the available ones are returned; when extraction yields
/// nothing (the root path, the empty string) the input comes back verbatim.
pub fn tail(path: &str, length: usize) -> String {
    let length = if length == 0 { 2 } else { length };

    let mut current = Path::new(path);
    let mut segments = Vec::with_capacity(length);

    for _ in 0..length {
        let Some(name) = current.file_name() else {
            break;
        };
        segments.push(name.to_string_lossy().into_owned());
        let Some(parent) = current.parent() else {
            break;
        };
        current = parent;
    }

    segments.reverse();
    let joined = segments.join("/");

    if joined.is_empty() {
        path.to_string()
    } else {
        joined
    }
}

/// Walk from `start_dir` upward until `check` accepts a directory.
///
/// Returns the first accepted directory, or `None` once the parent
/// computation stops making progress.
pub fn find_parent_that<F>(start_dir: &str, check: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let mut dir = start_dir.to_string();

    loop {
        if check(&dir) {
            return Some(dir);
        }

        let parent = Path::new(&dir).parent()?.to_string_lossy().into_owned();

        if parent == dir {
            return None;
        }

        dir = parent;
    }
}

/// Depth-first pre-order search for a directory accepted by `check`.
///
/// `start_dir` itself is checked first; subdirectories are then visited in
/// enumeration order. Unreadable directories are skipped. The traversal is
/// unbounded; use [`find_child_that_bounded`] on trees that may contain
/// symlink cycles.
pub fn find_child_that<F>(start_dir: &str, check: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    find_child_that_bounded(start_dir, usize::MAX, check)
}

/// [`find_child_that`] with a maximum descent depth below `start_dir`.
pub fn find_child_that_bounded<F>(start_dir: &str, max_depth: usize, check: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let mut stack = vec![(start_dir.to_string(), 0usize)];

    while let Some((dir, depth)) = stack.pop() {
        if check(&dir) {
            return Some(dir);
        }

        if depth >= max_depth {
            continue;
        }

        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };

        let mut children: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        // Stack order: reverse so enumeration order is searched first.
        children.reverse();
        for child in children {
            stack.push((child, depth + 1));
        }
    }

    None
}

/// Resolve a path against the filesystem, normalized and without trailing
/// separators.
///
/// A `~` anywhere in the path is substituted with the [`home`] directory. A
/// path that already canonicalizes to itself resolves directly; anything
/// else is canonicalized as `join(root, path)` and resolves only when a
/// non-empty `root` was supplied.
pub fn resolve(path: &str, root: Option<&str>) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let expanded = if path.contains('~') {
        match home() {
            Ok(home_dir) => path.replace('~', &home_dir),
            Err(_) => return None,
        }
    } else {
        path.to_string()
    };

    if let Ok(real) = fs::canonicalize(&expanded) {
        if real.to_string_lossy() == expanded {
            return Some(untrailslashit(&normalize(&expanded)));
        }
    }

    let joined = join(&[root.unwrap_or(""), &expanded]);
    let real = fs::canonicalize(&joined).ok()?;

    match root {
        Some(root) if !root.is_empty() => {
            Some(untrailslashit(&normalize(&real.to_string_lossy())))
        }
        _ => None,
    }
}

/// Absolute path to the current user's home directory.
///
/// Reads `HOME`, falling back to `HOMEDRIVE` + `HOMEPATH`; fails with an
/// `env.missing_var` error when neither signal is available.
pub fn home() -> Result<String> {
    home_from(|key| env::var(key).ok())
}

/// [`home`] with a path appended.
pub fn home_join(path: &str) -> Result<String> {
    Ok(join(&[home()?.as_str(), path]))
}

fn home_from<F>(lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let home_dir = match lookup("HOME") {
        Some(value) => value,
        None => match (lookup("HOMEDRIVE"), lookup("HOMEPATH")) {
            (Some(drive), Some(path)) => join(&[&drive, &path]),
            _ => {
                return Err(Error::env_missing_var(vec![
                    "HOME".to_string(),
                    "HOMEDRIVE".to_string(),
                    "HOMEPATH".to_string(),
                ]))
            }
        },
    };

    Ok(untrailslashit(&home_dir))
}
