use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::PropertyFile;

const COMMENT_MARKER: char = '#';
const SEPARATOR: char = '=';
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Read and parse a property file.
///
/// The file is decoded one byte per character (ISO-8859-1), so any byte
/// sequence is accepted.
pub fn parse_properties_file(path: &Path) -> Result<PropertyFile> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read property file: {:?}", path))?;
    let content = decode_latin1(&bytes);
    Ok(parse_properties(&content, path.to_string_lossy()))
}

/// Map every byte to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse already-decoded property text.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Blank lines, `#` comments and
/// lines without `=` are skipped. The key is
/// everything before the first `=`, the value everything after it with one
/// layer of surrounding double quotes removed.
pub fn parse_properties(content: &str, file_path: impl Into<String>) -> PropertyFile {
    let mut file = PropertyFile::new(file_path);

    for line in content.split(LINE_BREAKS) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        let Some((key, value)) = line.split_once(SEPARATOR) else {
            continue;
        };
        file.entries
            .insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    file
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
