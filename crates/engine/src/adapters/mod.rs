// Bridges from third-party certificate types to the SPKI input of the checker.

#[cfg(feature = "x509")]
pub mod x509;

#[cfg(all(feature = "openssl", feature = "x509"))]
pub mod openssl;
