//! Reads the export document into memory.

use std::fs;
use std::path::Path;

use casetree_data::TestDocument;
use log::info;
use serde_json::error::Category;

use crate::error::ExportError;

/// Load and decode the whole export document.
///
/// # Errors
/// `Read` if the file cannot be read, `Parse` if it is not well-formed JSON,
/// and `Structural` if it is JSON of the wrong shape or nested too deeply to
/// decode.
pub fn load_document(path: &Path) -> Result<TestDocument, ExportError> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_document(&text).map_err(|source| match source.classify() {
        Category::Data => ExportError::structural(format!("'{}': {source}", path.display())),
        Category::Syntax if is_recursion_limit(&source) => {
            ExportError::structural(format!("'{}': suites nested too deeply ({source})", path.display()))
        },
        Category::Io | Category::Syntax | Category::Eof => ExportError::Parse {
            path: path.to_path_buf(),
            source,
        },
    })?;
    info!("loaded {} top-level suites from '{}'", doc.suites().len(), path.display());
    Ok(doc)
}

/// serde_json reports its nesting limit as a syntax error; the text itself is
/// well formed, so the tree is what is wrong.
fn is_recursion_limit(err: &serde_json::Error) -> bool {
    err.to_string().starts_with("recursion limit exceeded")
}

/// Decode an export document from text.
pub fn parse_document(text: &str) -> Result<TestDocument, serde_json::Error> {
    serde_json::from_str(text)
}
