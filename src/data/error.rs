use std::path::PathBuf;

use thiserror::Error;

/// Why a catalog could not be installed. Every variant aborts the whole load.
///
/// The `Display` text is what the status bar shows, so it stays on one line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} content: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Expected a list of courses at the top level, found {found}")]
    Shape { found: &'static str },

    #[error("Course #{} is missing required field '{field}'", .index + 1)]
    Field { index: usize, field: &'static str },
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse {
            format: "JSON",
            message: e.to_string(),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Parse {
            format: "CSV",
            message: e.to_string(),
        }
    }
}
