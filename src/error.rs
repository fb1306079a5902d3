use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Fetch failures.
    Connect,
    Timeout,
    Status(u16),
    Body,

    // Status page failures.
    LineCount(usize),
    Line(usize),
    Field(&'static str),

    Config,
    Output,
}

impl ErrorKind {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connect | ErrorKind::Timeout | ErrorKind::Status(_) | ErrorKind::Body
        )
    }

    pub fn is_format(&self) -> bool {
        matches!(self, ErrorKind::LineCount(_) | ErrorKind::Line(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, ErrorKind::Field(_))
    }

    /// Which step of the check went wrong, for logs.
    pub fn stage(&self) -> &'static str {
        if self.is_transport() {
            "fetch"
        } else if self.is_format() {
            "status page format"
        } else if self.is_field() {
            "status page field"
        } else if *self == ErrorKind::Output {
            "output"
        } else {
            "config"
        }
    }
}

pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl Error {
    pub fn with_kind<M: Into<String>>(kind: ErrorKind, message: M) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(mut self, err: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(err));
        self
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
        write!(f, "Unexpected error ({:?}): {}", self.kind, self)
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

impl From<Error> for String {
    fn from(err: Error) -> Self {
        format!("{}", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
