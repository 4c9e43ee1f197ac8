use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    ConfigParse,
    ConfigNotFound,
    DateOutOfRange,
    NotConfigured,
    MissingElement,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(
            ErrorKind::ConfigParse,
            &format!("Could not parse config: {}", toml_error),
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let Error { kind, message } = err;
        match kind {
            ErrorKind::IOError(err) => err,
            kind => io::Error::new(
                io::ErrorKind::InvalidInput,
                message.unwrap_or_else(|| kind.as_str()),
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::ConfigParse => "invalid config format".to_owned(),
            ErrorKind::ConfigNotFound => "config file not found".to_owned(),
            ErrorKind::DateOutOfRange => "date out of range".to_owned(),
            ErrorKind::NotConfigured => "calendar not configured".to_owned(),
            ErrorKind::MissingElement => "no such element".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_message() {
        let bare = Error::from(ErrorKind::NotConfigured);
        assert_eq!(bare.to_string(), "calendar not configured");

        let detailed = Error::new(ErrorKind::DateOutOfRange, "month 12");
        assert_eq!(detailed.to_string(), "date out of range: month 12");
    }

    #[test]
    fn io_error_round_trips_kind() {
        let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }
}
