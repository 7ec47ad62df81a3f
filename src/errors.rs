use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    UnknownOption(i64),
    ParseInt {
        context: String,
        source: std::num::ParseIntError,
    },
    Validation(String),
    Decode(prost::DecodeError),
    Encode(prost::EncodeError),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl AppError {
    /// Wraps a failed integer parse with the message the user should see.
    pub fn parse_int(context: impl Into<String>, source: std::num::ParseIntError) -> Self {
        AppError::ParseInt {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::parse_int("Invalid number format", err)
    }
}

impl From<prost::DecodeError> for AppError {
    fn from(err: prost::DecodeError) -> Self {
        AppError::Decode(err)
    }
}

impl From<prost::EncodeError> for AppError {
    fn from(err: prost::EncodeError) -> Self {
        AppError::Encode(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(id) => {
                write!(f, "couldn't find person with contact ID: {}", id)
            }
            AppError::ParseCommand(_) => write!(f, "Unknown option"),
            AppError::UnknownOption(_) => write!(f, "Unknown option. Try again."),
            AppError::ParseInt { context, source } => write!(f, "{}: {}", context, source),
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Decode(e) => {
                write!(f, "failed to decode address book database: {}", e)
            }
            AppError::Encode(e) => {
                write!(f, "can't serialize address book to bytes: {}", e)
            }
            AppError::Json(e) => write!(f, "JSON export failed: {}", e),
            AppError::Csv(e) => write!(f, "CSV export failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::ParseInt { source, .. } => Some(source),
            AppError::Decode(e) => Some(e),
            AppError::Encode(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Csv(e) => Some(e),
            _ => None,
        }
    }
}
