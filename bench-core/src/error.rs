use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    Io(#[from] std::io::Error),
    Command(String),
    Decode(#[from] std::string::FromUtf8Error),
    Xml(String),
    Signal(String),
    Unsupported(String),
    Other(#[from] anyhow::Error),
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BenchError::Io(e) => write!(f, "I/O error: {}", e),
            BenchError::Command(s) => write!(f, "Command failed: {}", s),
            BenchError::Decode(e) => write!(f, "Invalid UTF-8 in output: {}", e),
            BenchError::Xml(s) => write!(f, "XML error: {}", s),
            BenchError::Signal(s) => write!(f, "Signal delivery failed: {}", s),
            BenchError::Unsupported(s) => write!(f, "Unsupported operation: {}", s),
            BenchError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
