//! Core engine: reading property files, locating localized variants and
//! scanning source files.
//!
//! - `parsers`: property file parsing
//! - `locator`: discovery of localized siblings of the reference file
//! - `file_scanner`: source file discovery and reading
//! - `context`: everything loaded for one run

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod locator;
pub mod parsers;

pub use context::{CheckContext, CheckOptions};
pub use data::{KeySet, PropertyFile, SourceFile};
