//! Embedded snapshot of the Mozilla root program.

use once_cell::sync::Lazy;

use super::config::TrustDefaults;
use super::identity_set::TrustedIdentitySet;

/// SPKI fingerprints of the roots in the Mozilla CA store, one per line.
/// Validated line by line at build time.
pub const MOZILLA_TRUSTED_SPKIS: &str = include_str!("mozilla_spki_sha256.txt");

static MOZILLA: Lazy<TrustedIdentitySet> = Lazy::new(|| {
    let set = TrustedIdentitySet::from_entries(MOZILLA_TRUSTED_SPKIS.lines());
    tracing::debug!(
        root_program = TrustDefaults::ROOT_PROGRAM,
        entries = set.len(),
        rejected = set.rejected(),
        "initialized embedded trust store"
    );
    set
});

/// The process-wide Mozilla set, built on first use.
pub fn mozilla() -> &'static TrustedIdentitySet {
    &MOZILLA
}
