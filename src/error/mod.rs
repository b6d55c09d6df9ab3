use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not access events file {}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse CSV rows to events")]
    CsvError(#[from] csv::Error),
    #[error("could not render reminder email")]
    RenderError(#[from] tera::Error),
    #[error(transparent)]
    SendError(#[from] crate::notify::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
