use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    KeyNotFound(String),
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound(key) => write!(f, "given key {key:?} not found"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected a {expected} value, found {found}")
            }
        }
    }
}

impl std::error::Error for Error {}
