pub mod checker;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod identity_set;
pub mod roots;
