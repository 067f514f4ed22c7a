// crates/engine/src/domain/identity_set.rs

use std::collections::HashSet;

use super::config::TrustDefaults;
use super::error::{EngineError, EngineResult};
use super::fingerprint::{self, SpkiFingerprint};

/// Immutable set of trusted SPKI fingerprints.
///
/// Entries are stored in canonical form and looked up by exact string
/// equality. Once built there is no way to add or remove entries, so a shared
/// reference can be read from any number of threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TrustedIdentitySet {
    entries: HashSet<String>,
    rejected: usize,
}

impl TrustedIdentitySet {
    /// A set that trusts nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from dataset lines, skipping anything that is not a canonical
    /// fingerprint. Blank lines and `#` comments are ignored; duplicates collapse.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::empty();
        for (idx, entry) in data_lines(entries) {
            match fingerprint::validate(entry) {
                Ok(()) => {
                    set.entries.insert(entry.to_owned());
                }
                Err(e) => {
                    tracing::warn!(line = idx + 1, error = %e, "skipping malformed trust dataset entry");
                    set.rejected += 1;
                }
            }
        }
        set
    }

    /// Like [`TrustedIdentitySet::from_entries`] but fails on the first
    /// malformed entry.
    pub fn try_from_entries<'a, I>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::empty();
        for (idx, entry) in data_lines(entries) {
            fingerprint::validate(entry)
                .map_err(|source| EngineError::MalformedEntry { line: idx + 1, source })?;
            set.entries.insert(entry.to_owned());
        }
        Ok(set)
    }

    /// Exact, case-sensitive membership. No trimming, no prefix matching.
    pub fn contains(&self, fingerprint: &str) -> bool {
        self.entries.contains(fingerprint)
    }

    pub fn contains_fingerprint(&self, fingerprint: &SpkiFingerprint) -> bool {
        self.contains(fingerprint.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of dataset entries dropped during lenient construction.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut sorted: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.into_iter()
    }
}

fn data_lines<'a, I>(entries: I) -> impl Iterator<Item = (usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, line)| (idx, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(TrustDefaults::COMMENT_PREFIX))
}
