/// Centralized constants for the trust engine.
/// Anything the embedded dataset and the fingerprint format agree on lives here.
pub struct TrustDefaults;

impl TrustDefaults {
    // Fingerprint format
    pub const DIGEST_LEN: usize = 32; // SHA-256
    pub const HEX_LEN: usize = Self::DIGEST_LEN * 2; // lowercase, no separators

    // Embedded dataset
    pub const ROOT_PROGRAM: &'static str = "mozilla";
    pub const COMMENT_PREFIX: char = '#';
}
