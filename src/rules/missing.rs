//! Missing translation key detection rule.
//!
//! Detects keys that are defined in the reference file but absent from a
//! localized file.

use crate::{core::PropertyFile, issues::MissingKeysIssue, rules::helpers::sorted_difference};

/// Check one localized file for keys it lacks.
///
/// Returns `None` when the localized file defines every reference key.
pub fn check_missing_keys(
    reference: &PropertyFile,
    localized: &PropertyFile,
) -> Option<MissingKeysIssue> {
    let keys = sorted_difference(&reference.key_set(), &localized.key_set());
    if keys.is_empty() {
        return None;
    }

    Some(MissingKeysIssue {
        file_path: localized.file_path.clone(),
        keys,
    })
}
