// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the infrastructure layers (configuration, state
/// persistence, gallery scanning, tour launching).
///
/// UI-level failures such as an invalid lightbox index are not errors; they
/// are reported through the diagnostics buffer and leave state untouched.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Scan(String),
    Launch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Scan(e) => write!(f, "Scan Error: {}", e),
            Error::Launch(e) => write!(f, "Launch Error: {}", e),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn scan_error_formats_properly() {
        let err = Error::Scan("unreadable directory".into());
        assert_eq!(format!("{}", err), "Scan Error: unreadable directory");
    }

    #[test]
    fn launch_error_formats_properly() {
        let err = Error::Launch("no opener".into());
        assert_eq!(format!("{}", err), "Launch Error: no opener");
    }
}
