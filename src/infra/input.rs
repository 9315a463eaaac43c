use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read query file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read query from stdin")]
    ReadStdin(#[source] io::Error),
}

/// Where the SQL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl QuerySource {
    pub fn from_args(query: Option<String>, file: Option<PathBuf>) -> Self {
        match (query, file) {
            (Some(query), _) => QuerySource::Inline(query),
            (None, Some(path)) => QuerySource::File(path),
            (None, None) => QuerySource::Stdin,
        }
    }

    pub fn read(&self) -> Result<String, InputError> {
        self.read_with(io::stdin().lock())
    }

    /// Reads the query, taking stdin content from `stdin` when needed.
    pub fn read_with(&self, mut stdin: impl Read) -> Result<String, InputError> {
        match self {
            QuerySource::Inline(query) => Ok(query.clone()),
            QuerySource::File(path) => {
                debug!(path = %path.display(), "reading query file");
                fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                    path: path.clone(),
                    source,
                })
            }
            QuerySource::Stdin => {
                let mut query = String::new();
                stdin
                    .read_to_string(&mut query)
                    .map_err(InputError::ReadStdin)?;
                Ok(query)
            }
        }
    }
}
