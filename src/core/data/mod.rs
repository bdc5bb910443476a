//! Data types shared by the parsers, the locator and the rules.

mod message;

pub use message::{KeySet, PropertyFile, SourceFile};
