//! Document reading and artifact persistence
//!
//! The narrow I/O edge around the engine: decode a document's bytes into
//! text, and save or reload the JSON artifact. The artifact for a document
//! `{stem}.{ext}` is named `{stem}_tags.json`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagError};
use crate::report::DocumentReport;

/// Read a document as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of equal value, so any byte
/// sequence decodes to some text; documents are classified, never
/// rejected for their encoding.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(err.into_bytes().iter().map(|&b| b as char).collect()),
    }
}

/// Artifact file name for a document path: `{stem}_tags.json`
pub fn artifact_name(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TagError::InvalidPath(path.display().to_string()))?;
    Ok(format!("{stem}_tags.json"))
}

impl DocumentReport {
    /// Read and scan a document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<DocumentReport> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| TagError::InvalidPath(path.display().to_string()))?;
        let text = read_document(path)?;
        Ok(DocumentReport::from_text(
            file_name,
            &path.display().to_string(),
            &text,
        ))
    }

    /// Render the report as two-space-indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the artifact into `dir`, named after the document's stem.
    /// Returns the written path.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let out = dir.as_ref().join(artifact_name(&self.file_name)?);
        fs::write(&out, self.to_json_pretty()?)?;
        Ok(out)
    }

    /// Reload a previously saved artifact
    pub fn load(path: impl AsRef<Path>) -> Result<DocumentReport> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }
}
