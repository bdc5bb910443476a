use std::{cell::OnceCell, path::PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::core::{
    PropertyFile, SourceFile,
    file_scanner::scan_source_files,
    locator::find_localized_files,
    parsers::properties::parse_properties_file,
};

/// Resolved options for a single run.
///
/// Produced by merging command-line flags over the config file, see
/// [`crate::cli::args::Arguments::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Reference property file.
    pub reference: PathBuf,
    /// Compare every localized file's keys against the reference.
    pub check_translations: bool,
    /// Look for key literals in source files.
    pub check_sources: bool,
    /// Root directory scanned for source files.
    pub source_root: PathBuf,
    /// Source file extension, without the dot.
    pub source_extension: String,
    /// Keys under `prefix.` are assumed used.
    pub used_prefixes: Vec<String>,
    /// Glob patterns of source paths to skip.
    pub ignores: Vec<String>,
    pub verbose: bool,
}

/// Everything loaded for one run.
///
/// Property files are read eagerly; source files are scanned on first use
/// so a run with `--no-java` never touches the source folder.
pub struct CheckContext {
    pub options: CheckOptions,
    reference: PropertyFile,
    localized: Vec<PropertyFile>,
    sources: OnceCell<Vec<SourceFile>>,
}

impl CheckContext {
    pub fn new(options: CheckOptions) -> Result<Self> {
        let reference = parse_properties_file(&options.reference)?;

        let mut localized = Vec::new();
        for path in find_localized_files(&options.reference)? {
            if options.verbose {
                eprintln!(
                    "{} Found localized file {}",
                    "note:".bold().cyan(),
                    path.display()
                );
            }
            localized.push(parse_properties_file(&path)?);
        }

        Ok(Self {
            options,
            reference,
            localized,
            sources: OnceCell::new(),
        })
    }

    pub fn reference(&self) -> &PropertyFile {
        &self.reference
    }

    pub fn localized(&self) -> &[PropertyFile] {
        &self.localized
    }

    /// Scan the source folder once and cache the result.
    pub fn sources(&self) -> Result<&[SourceFile]> {
        if let Some(files) = self.sources.get() {
            return Ok(files.as_slice());
        }

        let scan = scan_source_files(
            &self.options.source_root,
            &self.options.source_extension,
            &self.options.ignores,
            self.options.verbose,
        )?;
        if self.options.verbose {
            eprintln!(
                "{} Scanned {} source file(s) under {} ({} ignored)",
                "note:".bold().cyan(),
                scan.files.len(),
                self.options.source_root.display(),
                scan.ignored_count
            );
        }

        Ok(self.sources.get_or_init(|| scan.files).as_slice())
    }

    /// Number of scanned source files, 0 if sources were never needed.
    pub fn source_files_checked(&self) -> usize {
        self.sources.get().map_or(0, Vec::len)
    }
}
