use que_trust::EngineError;

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{message}")]
    Generic { message: String },
}

impl From<EngineError> for FfiError {
    fn from(e: EngineError) -> Self {
        FfiError::Generic {
            message: e.to_string(),
        }
    }
}

// ===== High-level API, mirroring the Rust facade =====

/// True when the DER certificate's key belongs to a Mozilla-trusted root.
#[uniffi::export]
pub fn is_trusted_certificate_der(der: Vec<u8>) -> bool {
    que_trust::is_trusted_der(&der)
}

/// True when the PEM certificate's key belongs to a Mozilla-trusted root.
#[uniffi::export]
pub fn is_trusted_certificate_pem(pem: String) -> bool {
    que_trust::is_trusted_pem(pem.as_bytes())
}

#[uniffi::export]
pub fn spki_fingerprint_der(der: Vec<u8>) -> Result<String, FfiError> {
    let fp = que_trust::spki_fingerprint_der(&der)?;
    Ok(fp.into())
}

/// Size of the embedded trust store.
#[uniffi::export]
pub fn trusted_root_count() -> u64 {
    que_trust::mozilla().len() as u64
}

uniffi::setup_scaffolding!();
