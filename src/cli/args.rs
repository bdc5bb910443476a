//! CLI argument definitions using clap.
//!
//! propcheck takes the reference property file as its only positional
//! argument. Every other option can also come from `.propcheckrc.json`;
//! flags given on the command line win over the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::{config::Config, core::CheckOptions};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Reference property file (e.g. src/main/resources/messages.properties)
    pub reference: PathBuf,

    /// Compare localized files against the reference (default)
    #[arg(long, overrides_with = "no_trans")]
    pub trans: bool,

    /// Skip the localized file comparison
    #[arg(long = "no-trans", overrides_with = "trans")]
    pub no_trans: bool,

    /// Check that keys are used in source files (default)
    #[arg(long, overrides_with = "no_java")]
    pub java: bool,

    /// Skip the source usage check
    #[arg(long = "no-java", overrides_with = "java")]
    pub no_java: bool,

    /// Source folder to scan [default: ./src/main/java]
    #[arg(long, value_name = "PATH")]
    pub jfolder: Option<PathBuf>,

    /// Key prefix assumed used without a literal reference
    /// Can be specified multiple times: --use enum --use role
    #[arg(long = "use", value_name = "PREFIX")]
    pub used_prefixes: Vec<String>,

    /// Source file extension [default: java]
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Merge the command line over `config` into the options for one run.
    pub fn resolve(self, config: Config) -> CheckOptions {
        let check_translations =
            flag(self.trans, self.no_trans).unwrap_or(config.check_translations);
        let check_sources = flag(self.java, self.no_java).unwrap_or(config.check_sources);

        let source_root = self
            .jfolder
            .unwrap_or_else(|| PathBuf::from(&config.source_root));
        let source_extension = self
            .ext
            .unwrap_or(config.source_extension)
            .trim_start_matches('.')
            .to_string();

        let mut used_prefixes = config.used_prefixes;
        for prefix in self.used_prefixes {
            if !used_prefixes.contains(&prefix) {
                used_prefixes.push(prefix);
            }
        }

        CheckOptions {
            reference: self.reference,
            check_translations,
            check_sources,
            source_root,
            source_extension,
            used_prefixes,
            ignores: config.ignores,
            verbose: self.verbose,
        }
    }
}

/// `--x` / `--no-x` pair; `None` when neither was given.
fn flag(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
