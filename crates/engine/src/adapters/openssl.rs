//! OpenSSL certificate handles as checker input.
//!
//! The SPKI is sliced out of the certificate's own DER rather than taken from
//! `public_key_to_der`, which re-encodes the key.

use std::borrow::Cow;

use ::openssl::x509::{X509Ref, X509};

use crate::domain::checker::SpkiSource;
use crate::domain::error::{EngineError, EngineResult};

/// Raw SubjectPublicKeyInfo DER of an OpenSSL certificate.
pub fn raw_spki(cert: &X509Ref) -> EngineResult<Vec<u8>> {
  let der = cert
    .to_der()
    .map_err(|e| EngineError::Certificate(e.to_string()))?;
  let parsed = super::x509::parse_der(&der)?;
  Ok(parsed.tbs_certificate.subject_pki.raw.to_vec())
}

impl SpkiSource for X509Ref {
  fn raw_spki(&self) -> Option<Cow<'_, [u8]>> {
    match raw_spki(self) {
      Ok(spki) => Some(Cow::Owned(spki)),
      Err(e) => {
        tracing::debug!(error = %e, "cannot extract SPKI from openssl certificate");
        None
      }
    }
  }
}

impl SpkiSource for X509 {
  fn raw_spki(&self) -> Option<Cow<'_, [u8]>> {
    let cert: &X509Ref = self;
    SpkiSource::raw_spki(cert)
  }
}
