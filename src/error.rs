use anyhow::Error as AnyhowError;
use std::{error::Error, fmt};

/// Convenience type for a result that may contain an `SvdAnnotateError`.
pub type SvdAnnotateResult<T> = std::result::Result<T, SvdAnnotateError>;

/// Error struct for all errors thrown by this crate or the crates on which it depends.
#[derive(Debug)]
pub struct SvdAnnotateError {
  /// Description of the error that occurred.
  pub details: String,
}
impl SvdAnnotateError {
  pub fn new(msg: &str) -> SvdAnnotateError {
    Self {
      details: msg.to_string(),
    }
  }
}
impl fmt::Display for SvdAnnotateError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.details)
  }
}
impl Error for SvdAnnotateError {}
impl From<std::io::Error> for SvdAnnotateError {
  fn from(err: std::io::Error) -> Self {
    SvdAnnotateError::new(&format!("std::io::Error {}", &err.to_string()))
  }
}
impl From<xmltree::ParseError> for SvdAnnotateError {
  fn from(err: xmltree::ParseError) -> Self {
    SvdAnnotateError::new(&format!("xmltree::ParseError {}", &err.to_string()))
  }
}
impl From<AnyhowError> for SvdAnnotateError {
  fn from(err: AnyhowError) -> Self {
    SvdAnnotateError::new(&format!("anyhow::Error {:?}", err))
  }
}
