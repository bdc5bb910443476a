use crate::core::KeySet;

/// Keys of `left` that are not in `right`, sorted for deterministic output.
pub fn sorted_difference(left: &KeySet, right: &KeySet) -> Vec<String> {
    let mut keys: Vec<String> = left.difference(right).cloned().collect();
    keys.sort();
    keys
}

/// Whether `key` lives under one of the `prefixes` (`prefix.` match).
///
/// A bare prefix is not exempt itself: with prefix `enum`, `enum.x` is
/// exempt but `enum` and `enumx` are not.
pub fn is_exempt(key: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        key.strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    })
}
