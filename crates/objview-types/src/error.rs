use std::fmt;

/// Result type for objview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Upstream preview document failed to parse
    Parse(serde_json::Error),
    /// A value-kind property carried neither a nested preview nor fallback text
    PropertyWithoutValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "malformed preview document: {}", err),
            Error::PropertyWithoutValue(name) => {
                write!(f, "property '{}' has neither a value preview nor raw text", name)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::PropertyWithoutValue(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
