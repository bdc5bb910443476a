use std::collections::{HashMap, HashSet};

/// Keys of a single property file.
pub type KeySet = HashSet<String>;

/// A parsed key/value property file.
///
/// Built fresh on every read and never mutated once parsing finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFile {
    /// Path the file was read from (e.g., "./messages_fr.properties").
    pub file_path: String,
    /// Key -> value. Later duplicates overwrite earlier ones.
    pub entries: HashMap<String, String>,
}

impl PropertyFile {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: HashMap::new(),
        }
    }

    /// Owned set of keys, used for set difference against other files.
    pub fn key_set(&self) -> KeySet {
        self.entries.keys().cloned().collect()
    }
}

/// Full text of one scanned source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }

    /// Whether the text contains `key` as a double-quoted literal.
    pub fn quotes(&self, key: &str) -> bool {
        self.content.contains(&format!("\"{}\"", key))
    }
}
