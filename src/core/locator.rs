//! Discovery of localized siblings of a reference property file.
//!
//! `app.properties` is split into the prefix `app` and the suffix
//! `.properties`; every file below the reference's directory whose name
//! starts with the prefix and ends with the suffix (e.g. `app_fr.properties`)
//! is a localized variant.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use walkdir::WalkDir;

/// Name, then one or more `.extension` groups. The prefix is greedy and the
/// suffix lazy, so only the last extension lands in the suffix.
static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)((?:\.[^.]+)+?)$").unwrap());

/// Split a file name into `(prefix, suffix)`.
///
/// ```
/// use propcheck::core::locator::split_file_name;
///
/// let (prefix, suffix) = split_file_name("app.properties").unwrap();
/// assert_eq!(prefix, "app");
/// assert_eq!(suffix, ".properties");
/// assert!(split_file_name("README").is_err());
/// ```
pub fn split_file_name(file_name: &str) -> Result<(&str, &str)> {
    let captures = FILE_NAME_PATTERN
        .captures(file_name)
        .ok_or_else(|| anyhow!("Invalid file name: \"{}\"", file_name))?;

    match (captures.get(1), captures.get(2)) {
        (Some(prefix), Some(suffix)) => Ok((prefix.as_str(), suffix.as_str())),
        _ => Err(anyhow!("Invalid file name: \"{}\"", file_name)),
    }
}

/// Find every localized variant of `reference`, sorted by path.
///
/// The reference file itself (and any file with the same name in a
/// subdirectory) is never returned. Symlinks to files count as files;
/// symlinked directories are not descended into.
pub fn find_localized_files(reference: &Path) -> Result<Vec<PathBuf>> {
    let file_name = reference
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Invalid file name: {:?}", reference))?;
    let (prefix, suffix) = split_file_name(&file_name)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(reference_dir(reference)) {
        let entry = entry.context("Failed to walk translation directory")?;
        if !entry.path().is_file() {
            continue;
        }
        let is_variant = {
            let name = entry.file_name().to_string_lossy();
            name.starts_with(prefix) && name.ends_with(suffix) && name != file_name.as_str()
        };
        if is_variant {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Directory the reference lives in; `.` for a bare file name.
fn reference_dir(reference: &Path) -> &Path {
    match reference.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
