#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Feed,
    Asset,
    Output,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn new_feed<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Feed, message)
    }

    pub fn new_asset<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Asset, message)
    }

    pub fn new_output<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Output, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::new_feed(format!("request failed : {error}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new_feed(format!("not json format : {error}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new_output(error.to_string())
    }
}
