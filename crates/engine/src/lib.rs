// crates/engine/src/lib.rs

//! Public facade for the Que trust engine.
//! Answers one question for the lint pipeline (and the FFI crate): does this
//! certificate's public key belong to a root in the Mozilla trust store?

pub mod adapters;
pub mod domain;

#[cfg(feature = "x509")]
use domain::error::EngineResult;

/// True when the SHA-256 of the certificate's raw SPKI is in the embedded
/// Mozilla set. Never fails: a certificate without SPKI bytes is untrusted.
pub fn is_trusted<C: SpkiSource + ?Sized>(cert: &C) -> bool {
    MembershipChecker::mozilla().is_trusted(cert)
}

/// Parse a DER certificate and check it. Unparseable input is untrusted.
#[cfg(feature = "x509")]
pub fn is_trusted_der(cert_der: &[u8]) -> bool {
    match adapters::x509::parse_der(cert_der) {
        Ok(cert) => is_trusted(&cert),
        Err(e) => {
            tracing::debug!(error = %e, "certificate did not parse; not trusted");
            false
        }
    }
}

/// Decode a PEM certificate and check it. Undecodable input is untrusted.
#[cfg(feature = "x509")]
pub fn is_trusted_pem(cert_pem: &[u8]) -> bool {
    match adapters::x509::pem_to_der(cert_pem) {
        Ok(der) => is_trusted_der(&der),
        Err(e) => {
            tracing::debug!(error = %e, "PEM did not decode; not trusted");
            false
        }
    }
}

/// Canonical SPKI fingerprint of a DER certificate, for dataset maintenance
/// and diagnostics.
#[cfg(feature = "x509")]
pub fn spki_fingerprint_der(cert_der: &[u8]) -> EngineResult<SpkiFingerprint> {
    let cert = adapters::x509::parse_der(cert_der)?;
    domain::checker::fingerprint(&cert).ok_or_else(|| {
        EngineError::Certificate("certificate has an empty SubjectPublicKeyInfo".into())
    })
}

// Re-exports for convenience
pub use domain::checker::{fingerprint, MembershipChecker, RawSpki, SpkiSource};
pub use domain::config::TrustDefaults;
pub use domain::error::{EngineError, FingerprintError};
pub use domain::fingerprint::SpkiFingerprint;
pub use domain::identity_set::TrustedIdentitySet;
pub use domain::roots::{mozilla, MOZILLA_TRUSTED_SPKIS};
