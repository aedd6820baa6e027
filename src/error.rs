use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdError>;

#[derive(Error, Debug)]
pub enum IdError {
    #[error("failed reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed reading {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IdError {
    pub(crate) fn at_path(path: PathBuf, err: IdError) -> Self {
        match err {
            IdError::Io(source) => IdError::File { path, source },
            file @ IdError::File { .. } => file,
        }
    }
}
