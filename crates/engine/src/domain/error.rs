// crates/engine/src/domain/error.rs
use thiserror::Error;

/// Why a string is not a canonical SPKI fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
  #[error("expected 64 hex characters, found {found}")]
  InvalidLength { found: usize },

  #[error("invalid character {found:?} at index {index} (only 0-9 and a-f are allowed)")]
  InvalidCharacter { index: usize, found: char },
}

#[derive(Debug, Error)]
pub enum EngineError {
  #[error(transparent)]
  Fingerprint(#[from] FingerprintError),

  #[error("malformed trust dataset entry on line {line}: {source}")]
  MalformedEntry {
    line: usize,
    #[source]
    source: FingerprintError,
  },

  #[error("certificate: {0}")]
  Certificate(String),

  #[error("pem: {0}")]
  Pem(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
