use anyhow::Result;

use super::ExitStatus;
use crate::{
    core::{CheckContext, CheckOptions},
    issues::Issue,
    rules::{check_translation_issues, unused::check_unused_keys_issues},
};

/// Result of one validation run.
#[derive(Debug)]
pub struct CheckResult {
    /// Translation issues first (per localized file), then usage issues
    /// (reference first, then each localized file).
    pub issues: Vec<Issue>,
    /// Number of localized property files discovered next to the reference.
    pub localized_files_checked: usize,
    /// Number of source files scanned, 0 when the usage check was disabled.
    pub source_files_checked: usize,
}

impl CheckResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.issues.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

/// Run every enabled check.
///
/// # Returns
/// - `Ok(CheckResult)` with all issues found; mismatches are not errors
/// - `Err` if a file cannot be read or the reference file name cannot be split
pub fn run(options: CheckOptions) -> Result<CheckResult> {
    let ctx = CheckContext::new(options)?;
    let mut issues = Vec::new();

    if ctx.options.check_translations {
        issues.extend(check_translation_issues(&ctx));
    }

    if ctx.options.check_sources {
        issues.extend(
            check_unused_keys_issues(&ctx)?
                .into_iter()
                .map(Issue::UnusedKeys),
        );
    }

    Ok(CheckResult {
        issues,
        localized_files_checked: ctx.localized().len(),
        source_files_checked: ctx.source_files_checked(),
    })
}
