// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Anything that goes wrong while discovering, opening or parsing the input
/// archives. Any of these aborts the run before a single output file is
/// touched.
#[derive(Debug, Error)]
pub enum DataReadError {
    #[error("invalid archive pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("listing input directory: {0}")]
    Listing(#[from] glob::GlobError),

    #[error("opening archive {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("archive {} holds {found} files, expected exactly one", .path.display())]
    EntryCount { path: PathBuf, found: usize },

    #[error("CSV parse error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("header of {} differs from {}", .path.display(), .expected_from.display())]
    SchemaMismatch {
        path: PathBuf,
        expected_from: PathBuf,
    },
}

impl DataReadError {
    /// The archive the error refers to, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Pattern { .. } | Self::Listing(_) => None,
            Self::Open { path, .. }
            | Self::Archive { path, .. }
            | Self::EntryCount { path, .. }
            | Self::Csv { path, .. }
            | Self::MissingColumn { path, .. }
            | Self::SchemaMismatch { path, .. } => Some(path),
        }
    }
}
