use std::{fs, path::Path};

use crate::{
    csv::HEADER,
    error::{Error, Result},
};

/// Copy the headerless calendar file to `working`, prefixed with [`HEADER`].
///
/// Any previous content of `working` is replaced. Returns the number of bytes
/// written.
pub fn prepare_working_file(source: &Path, working: &Path) -> Result<usize> {
    let raw = fs::read(source).map_err(|source_err| Error::FileError {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let mut content = Vec::with_capacity(HEADER.len() + raw.len());
    content.extend_from_slice(HEADER.as_bytes());
    content.extend_from_slice(&raw);

    fs::write(working, &content).map_err(|source| Error::FileError {
        path: working.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "copied {} to {} ({} bytes)",
        source.display(),
        working.display(),
        content.len()
    );
    Ok(content.len())
}
