//! File parsers.
//!
//! - `properties`: flat `key=value` property files

pub mod properties;
