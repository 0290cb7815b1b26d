use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnknownHttpMethod(String),
    InvalidApiVersion(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownHttpMethod(method) => {
                write!(f, "\"{}\" is not a supported HTTP method", method)
            }
            Error::InvalidApiVersion(version) => {
                write!(f, "\"{}\" is not a valid API version tag", version)
            }
        }
    }
}
