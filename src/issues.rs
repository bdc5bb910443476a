//! Issue types for property file validation results.
//!
//! Each issue groups the offending keys of one file for one rule, so the
//! reporter can print a labeled, sorted list per file. Every issue fails
//! the run.

use enum_dispatch::enum_dispatch;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MissingKey,
    UnnecessaryKey,
    UnusedKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::UnnecessaryKey => write!(f, "unnecessary-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
        }
    }
}

/// Which key set a usage check ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// The reference file's keys.
    Default,
    /// A localized file's own keys.
    Localized,
}

impl std::fmt::Display for KeyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyScope::Default => write!(f, "default"),
            KeyScope::Localized => write!(f, "localized"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Keys defined in the reference file but absent from a localized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeysIssue {
    /// The localized file lacking the keys.
    pub file_path: String,
    /// Sorted.
    pub keys: Vec<String>,
}

impl MissingKeysIssue {
    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Keys defined in a localized file but not in the reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnecessaryKeysIssue {
    /// The localized file defining the extra keys.
    pub file_path: String,
    /// Sorted.
    pub keys: Vec<String>,
}

impl UnnecessaryKeysIssue {
    pub fn rule() -> Rule {
        Rule::UnnecessaryKey
    }
}

/// Keys never referenced as a quoted literal in any source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeysIssue {
    pub scope: KeyScope,
    /// The property file the keys were taken from.
    pub file_path: String,
    /// Sorted.
    pub keys: Vec<String>,
}

impl UnusedKeysIssue {
    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A validation issue found during a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKeys(MissingKeysIssue),
    UnnecessaryKeys(UnnecessaryKeysIssue),
    UnusedKeys(UnusedKeysIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKeys(_) => MissingKeysIssue::rule(),
            Issue::UnnecessaryKeys(_) => UnnecessaryKeysIssue::rule(),
            Issue::UnusedKeys(_) => UnusedKeysIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// File the issue points at.
    fn file_path(&self) -> &str;

    /// Heading for the key list.
    fn label(&self) -> String;

    /// Offending keys, sorted.
    fn keys(&self) -> &[String];

    /// Rule identifier.
    fn report_rule(&self) -> Rule;
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn label(&self) -> String {
        "missing keys".to_string()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnnecessaryKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn label(&self) -> String {
        "unnecessary keys".to_string()
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnusedKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn label(&self) -> String {
        format!("unused keys ({})", self.scope)
    }

    fn keys(&self) -> &[String] {
        &self.keys
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
