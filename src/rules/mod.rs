//! Rule implementations for propcheck.
//!
//! Each rule is a pure function over already-loaded property and source
//! files returning a specific issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Set difference and prefix exemption helpers
//! - `missing`: Reference keys absent from a localized file
//! - `unnecessary`: Localized keys absent from the reference file
//! - `unused`: Keys never quoted in any source file

pub mod helpers;
pub mod missing;
pub mod unnecessary;
pub mod unused;

use crate::{core::CheckContext, issues::Issue};

/// Compare every localized file with the reference.
///
/// Issues are ordered per localized file: missing keys, then unnecessary keys.
pub fn check_translation_issues(ctx: &CheckContext) -> Vec<Issue> {
    let reference = ctx.reference();
    let mut issues = Vec::new();

    for localized in ctx.localized() {
        if let Some(issue) = missing::check_missing_keys(reference, localized) {
            issues.push(Issue::MissingKeys(issue));
        }
        if let Some(issue) = unnecessary::check_unnecessary_keys(reference, localized) {
            issues.push(Issue::UnnecessaryKeys(issue));
        }
    }

    issues
}
