//! Canonical identity of a public key: SHA-256 over the DER-encoded
//! SubjectPublicKeyInfo, rendered as 64 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::config::TrustDefaults;
use super::error::FingerprintError;

/// A validated SPKI fingerprint in canonical form.
///
/// The canonical form is the only accepted spelling: uppercase digits,
/// separators or surrounding whitespace are rejected by [`SpkiFingerprint::parse`]
/// instead of being normalized. The embedded dataset is generated in this
/// form, so comparisons stay exact string comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpkiFingerprint(String);

impl SpkiFingerprint {
    /// Hash raw SPKI bytes exactly as given.
    pub fn of_spki(spki_der: &[u8]) -> Self {
        let digest = Sha256::digest(spki_der);
        Self(hex::encode(digest))
    }

    /// Accept a fingerprint only if it is already canonical.
    pub fn parse(s: &str) -> Result<Self, FingerprintError> {
        validate(s)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn validate(s: &str) -> Result<(), FingerprintError> {
    if s.len() != TrustDefaults::HEX_LEN {
        return Err(FingerprintError::InvalidLength { found: s.len() });
    }
    if let Some((index, found)) = s
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
    {
        return Err(FingerprintError::InvalidCharacter { index, found });
    }
    Ok(())
}

impl fmt::Display for SpkiFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpkiFingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SpkiFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SpkiFingerprint {
    type Error = FingerprintError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate(&s)?;
        Ok(Self(s))
    }
}

impl From<SpkiFingerprint> for String {
    fn from(fp: SpkiFingerprint) -> Self {
        fp.0
    }
}
