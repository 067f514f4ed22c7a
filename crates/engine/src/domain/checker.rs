// crates/engine/src/domain/checker.rs

use std::borrow::Cow;

use super::fingerprint::SpkiFingerprint;
use super::identity_set::TrustedIdentitySet;
use super::roots;

/// Anything that can hand over the raw DER bytes of its SubjectPublicKeyInfo,
/// exactly as they appear in the certificate (algorithm identifier and
/// BIT STRING, not re-encoded).
///
/// Return `None` when the SPKI is not available; the checker treats that as
/// "not trusted".
pub trait SpkiSource {
    fn raw_spki(&self) -> Option<Cow<'_, [u8]>>;
}

/// SPKI bytes the caller already extracted.
#[derive(Debug, Clone, Copy)]
pub struct RawSpki<'a>(pub &'a [u8]);

impl SpkiSource for RawSpki<'_> {
    fn raw_spki(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self.0))
    }
}

impl<T: SpkiSource + ?Sized> SpkiSource for &T {
    fn raw_spki(&self) -> Option<Cow<'_, [u8]>> {
        (**self).raw_spki()
    }
}

/// Answers whether a certificate's key belongs to a trusted root.
#[derive(Debug, Clone, Copy)]
pub struct MembershipChecker<'s> {
    set: &'s TrustedIdentitySet,
}

impl<'s> MembershipChecker<'s> {
    pub fn new(set: &'s TrustedIdentitySet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &'s TrustedIdentitySet {
        self.set
    }

    /// Hash the certificate's SPKI and look it up. Missing or empty SPKI
    /// bytes are never trusted.
    pub fn is_trusted<C: SpkiSource + ?Sized>(&self, cert: &C) -> bool {
        match cert.raw_spki() {
            Some(spki) => self.is_trusted_spki(&spki),
            None => {
                tracing::trace!("certificate exposes no SPKI; not trusted");
                false
            }
        }
    }

    pub fn is_trusted_spki(&self, spki_der: &[u8]) -> bool {
        if spki_der.is_empty() {
            tracing::trace!("empty SPKI; not trusted");
            return false;
        }
        let fp = SpkiFingerprint::of_spki(spki_der);
        let trusted = self.set.contains_fingerprint(&fp);
        tracing::trace!(fingerprint = %fp, trusted, "checked SPKI against trust store");
        trusted
    }
}

impl MembershipChecker<'static> {
    /// Checker backed by the embedded Mozilla set.
    pub fn mozilla() -> Self {
        Self::new(roots::mozilla())
    }
}

/// Fingerprint of a certificate's SPKI, if it has a non-empty one.
pub fn fingerprint<C: SpkiSource + ?Sized>(cert: &C) -> Option<SpkiFingerprint> {
    cert.raw_spki()
        .filter(|spki| !spki.is_empty())
        .map(|spki| SpkiFingerprint::of_spki(&spki))
}
