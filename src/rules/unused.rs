//! Unused translation key detection rule.
//!
//! A key counts as used when its double-quoted literal (`"key"`) appears
//! anywhere in a scanned source file. Keys under an exempt prefix are
//! assumed to be looked up programmatically and are never reported.

use anyhow::Result;

use crate::{
    core::{CheckContext, KeySet, PropertyFile, SourceFile},
    issues::{KeyScope, UnusedKeysIssue},
    rules::helpers::is_exempt,
};

/// Run the usage check against the reference keys, then against each
/// localized file's own keys.
pub fn check_unused_keys_issues(ctx: &CheckContext) -> Result<Vec<UnusedKeysIssue>> {
    let sources = ctx.sources()?;
    let prefixes = &ctx.options.used_prefixes;

    let mut issues: Vec<UnusedKeysIssue> =
        check_unused_keys(KeyScope::Default, ctx.reference(), prefixes, sources)
            .into_iter()
            .collect();
    issues.extend(
        ctx.localized()
            .iter()
            .filter_map(|file| check_unused_keys(KeyScope::Localized, file, prefixes, sources)),
    );

    Ok(issues)
}

/// Check for keys of `file` never quoted in any of `sources`.
///
/// # Arguments
/// * `scope` - Whether `file` is the reference or a localized file
/// * `file` - Property file whose keys are checked
/// * `used_prefixes` - Keys under `prefix.` are exempt
/// * `sources` - Scanned source files
///
/// # Returns
/// `None` when every non-exempt key is referenced somewhere
pub fn check_unused_keys(
    scope: KeyScope,
    file: &PropertyFile,
    used_prefixes: &[String],
    sources: &[SourceFile],
) -> Option<UnusedKeysIssue> {
    let mut remaining: KeySet = file
        .entries
        .keys()
        .filter(|key| !is_exempt(key, used_prefixes))
        .cloned()
        .collect();

    for source in sources {
        if remaining.is_empty() {
            break;
        }
        remaining = remaining
            .into_iter()
            .filter(|key| !source.quotes(key))
            .collect();
    }

    if remaining.is_empty() {
        return None;
    }

    let mut keys: Vec<String> = remaining.into_iter().collect();
    keys.sort();
    Some(UnusedKeysIssue {
        scope,
        file_path: file.file_path.clone(),
        keys,
    })
}
