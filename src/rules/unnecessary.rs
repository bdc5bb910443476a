//! Unnecessary translation key detection rule.
//!
//! Detects keys that exist in a localized file but not in the reference
//! file, typically leftovers of keys removed from the reference.

use crate::{
    core::PropertyFile, issues::UnnecessaryKeysIssue, rules::helpers::sorted_difference,
};

pub fn check_unnecessary_keys(
    reference: &PropertyFile,
    localized: &PropertyFile,
) -> Option<UnnecessaryKeysIssue> {
    let keys = sorted_difference(&localized.key_set(), &reference.key_set());
    if keys.is_empty() {
        return None;
    }

    Some(UnnecessaryKeysIssue {
        file_path: localized.file_path.clone(),
        keys,
    })
}
