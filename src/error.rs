use std::path::PathBuf;

use thiserror::Error;

/// Failure confined to one input document. The batch carries on without it.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid GMX markup: {source}", .path.display())]
    Markup {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{} has no <{section}> section", .path.display())]
    MissingSection { path: PathBuf, section: &'static str },
}

pub type DocumentResult<T> = Result<T, DocumentError>;
