//! x509-parser backed certificate input.

use std::borrow::Cow;

use x509_parser::certificate::X509Certificate;
use x509_parser::pem::parse_x509_pem;

use crate::domain::checker::SpkiSource;
use crate::domain::error::{EngineError, EngineResult};

const PEM_CERTIFICATE_LABEL: &str = "CERTIFICATE";

impl SpkiSource for X509Certificate<'_> {
  fn raw_spki(&self) -> Option<Cow<'_, [u8]>> {
    Some(Cow::Borrowed(self.tbs_certificate.subject_pki.raw))
  }
}

/// Parse a DER certificate. Trailing bytes after the certificate are ignored.
pub fn parse_der(der: &[u8]) -> EngineResult<X509Certificate<'_>> {
  let (_, cert) = x509_parser::parse_x509_certificate(der)
    .map_err(|e| EngineError::Certificate(e.to_string()))?;
  Ok(cert)
}

/// Decode the first PEM block, which must be a `CERTIFICATE`, into DER.
pub fn pem_to_der(pem: &[u8]) -> EngineResult<Vec<u8>> {
  let (_, block) = parse_x509_pem(pem).map_err(|e| EngineError::Pem(e.to_string()))?;
  if block.label != PEM_CERTIFICATE_LABEL {
    return Err(EngineError::Pem(format!(
      "expected a {PEM_CERTIFICATE_LABEL} block, found {}",
      block.label
    )));
  }
  Ok(block.contents)
}
