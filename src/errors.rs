use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading, decoding or writing equipment fixtures.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be opened, read or written.
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON.
    #[error("failed to decode `{path}`: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing processed records failed.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Errors returned when loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid theme file: {0}")]
    Theme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected() {
        let e = DataError::io(
            "/nope.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(e.is_not_found());
        assert!(e.to_string().contains("/nope.json"));

        let denied = DataError::io(
            "/x.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!denied.is_not_found());
    }
}
