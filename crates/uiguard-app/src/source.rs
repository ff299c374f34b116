//! Input acquisition: one named file, or all of standard input.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Error reading file {path}: {source}")]
    File {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Read the whole of `path`, or of stdin when no path is given.
///
/// Invalid UTF-8 is reported as a read failure.
pub fn read_source(path: Option<&Utf8Path>) -> Result<String, SourceError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| SourceError::File {
            path: path.to_path_buf(),
            source,
        }),
        None => read_source_from(std::io::stdin().lock()),
    }
}

pub fn read_source_from<R: Read>(mut reader: R) -> Result<String, SourceError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(SourceError::Stdin)?;
    Ok(text)
}
