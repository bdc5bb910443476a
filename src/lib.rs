//! propcheck - localized property file checker
//!
//! propcheck validates a reference `.properties` file against its localized
//! siblings (`app.properties` vs `app_fr.properties`, ...) and against the
//! source code that is supposed to use the keys. It reports keys missing
//! from a localized file, keys a localized file defines but the reference
//! does not, and keys never referenced as a quoted literal in any source
//! file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Property parsing, localized file discovery, source scanning
//! - `issues`: Issue type definitions
//! - `rules`: Missing, unnecessary and unused key detection

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
