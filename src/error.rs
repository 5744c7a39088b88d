// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Surface(SurfaceError),
}

/// Problems with the data a host hands to the controls.
///
/// The controls never fail on their own; these come from hosts reading
/// options such as capture-time labels from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Capture-time labels could not be read.
    CaptureTimes { path: String, reason: String },

    /// The capture-time file holds no labels.
    NoCaptureTimes(String),
}

impl SurfaceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SurfaceError::CaptureTimes { .. } => "error-surface-capture-times",
            SurfaceError::NoCaptureTimes(_) => "error-surface-no-capture-times",
        }
    }

    /// File the error is about.
    pub fn path(&self) -> &str {
        match self {
            SurfaceError::CaptureTimes { path, .. } | SurfaceError::NoCaptureTimes(path) => path,
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::CaptureTimes { path, reason } => {
                write!(f, "Capture times unreadable ({}): {}", path, reason)
            }
            SurfaceError::NoCaptureTimes(path) => write!(f, "No capture times in {}", path),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Surface(e) => write!(f, "Surface Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
