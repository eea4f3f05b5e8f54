use std::{error, fmt};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MissingTimestampColumn,
    MissingTimestampFormat,
    TimestampParseFailure,
    ScanFailure,
    Other,
}

pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn error::Error>>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E: error::Error + 'static>(kind: ErrorKind, message: &str, err: E) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unexpected error: {}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}. Source error: {}", self.message, err),
            None => write!(f, "{}", self.message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self {
            kind: ErrorKind::Other,
            message,
            source: None,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self {
            kind: ErrorKind::Other,
            message: message.into(),
            source: None,
        }
    }
}

impl<E: error::Error + 'static> From<(String, E)> for Error {
    fn from((message, err): (String, E)) -> Self {
        Self {
            kind: ErrorKind::Other,
            message,
            source: Some(Box::new(err)),
        }
    }
}

impl<E: error::Error + 'static> From<(&str, E)> for Error {
    fn from((message, err): (&str, E)) -> Self {
        Self {
            kind: ErrorKind::Other,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        format!("{}", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
