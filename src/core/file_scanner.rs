use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::SourceFile;

/// Result of scanning source files.
pub struct ScanResult {
    /// Files in walk order, each read exactly once.
    pub files: Vec<SourceFile>,
    /// Files skipped because they matched an ignore pattern.
    pub ignored_count: usize,
}

/// Read every file under `root` whose name ends with `.{extension}`.
///
/// A missing `root` is not an error: a warning is printed and nothing is
/// scanned. Symlinks to files are read; symlinked directories are not
/// followed. Walk and read failures abort the scan.
pub fn scan_source_files(
    root: &Path,
    extension: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    let mut result = ScanResult {
        files: Vec::new(),
        ignored_count: 0,
    };

    if !root.exists() {
        eprintln!(
            "{} Source folder does not exist: {}",
            "warning:".bold().yellow(),
            root.display()
        );
        return Ok(result);
    }

    // Patterns are checked by Config::validate; anything else is dropped.
    let patterns: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();
    let file_suffix = format!(".{}", extension);

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk source folder: {}", root.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&file_suffix) {
            continue;
        }

        let path_str = path.to_string_lossy();
        if patterns.iter().any(|p| p.matches(&path_str)) {
            result.ignored_count += 1;
            if verbose {
                eprintln!("{} Ignoring {}", "note:".bold().cyan(), path_str);
            }
            continue;
        }

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read source file: {:?}", path))?;
        result.files.push(SourceFile::new(
            path_str.into_owned(),
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
    }

    Ok(result)
}
