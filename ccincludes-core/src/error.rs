use crate::table::TableError;
use ccincludes_fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot append to {}: fragment has not been written yet", path.display())]
    MissingFragment { path: PathBuf },

    #[error("unrecognized variant tag '{0}' (expected 'full' or 'path')")]
    UnknownVariant(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl BuildError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Fetch(e) => e.exit_code(),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
