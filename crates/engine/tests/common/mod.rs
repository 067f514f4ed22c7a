#![allow(dead_code)]

use rcgen::{Certificate, CertificateParams, DnType, KeyPair};

/// ISRG Root X1, a long-lived root in the Mozilla store.
pub const ISRG_ROOT_X1_PEM: &str = include_str!("../fixtures/isrg_root_x1.pem");

/// Self-signed root that no root program includes.
pub const UNTRUSTED_ROOT_PEM: &str = include_str!("../fixtures/untrusted_root.pem");

/// SPKI fingerprint of ISRG Root X1.
pub const ISRG_ROOT_X1_SPKI_SHA256: &str =
    "0b9fa5a59eed715c26c1020c711b4f6ec42d58b0015e14337a39dad301c5afc3";

/// SPKI fingerprint of the untrusted fixture root.
pub const UNTRUSTED_ROOT_SPKI_SHA256: &str =
    "6011226b748fdcbb996511ce6ff19d369f2547fafb835614c35cd5a374f1997b";

#[cfg(feature = "x509")]
pub fn isrg_root_x1_der() -> Vec<u8> {
    que_trust::adapters::x509::pem_to_der(ISRG_ROOT_X1_PEM.as_bytes()).expect("isrg pem")
}

#[cfg(feature = "x509")]
pub fn untrusted_root_der() -> Vec<u8> {
    que_trust::adapters::x509::pem_to_der(UNTRUSTED_ROOT_PEM.as_bytes()).expect("untrusted pem")
}

/// Fresh ES256 key pair in PKCS#8 DER, so several certificates can share it.
pub fn generate_es256_key_der() -> Vec<u8> {
    KeyPair::generate(&rcgen::PKCS_ECDSA_P256_SHA256)
        .expect("keypair")
        .serialize_der()
}

/// Self-signed certificate for `common_name`, signed with the given PKCS#8 key.
pub fn self_signed_der(common_name: &str, key_der: &[u8]) -> Vec<u8> {
    let key = KeyPair::from_der(key_der).expect("keypair from der");
    let mut params = CertificateParams::new(vec![]);
    params.alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    params.distinguished_name.push(DnType::CommonName, common_name);
    params.key_pair = Some(key);
    let cert = Certificate::from_params(params).expect("cert");
    cert.serialize_der().expect("cert der")
}

/// Ad-hoc self-signed certificate with its own fresh key.
pub fn adhoc_self_signed_der() -> Vec<u8> {
    self_signed_der("que-trust ad hoc test root", &generate_es256_key_der())
}

/// Raw SPKI bytes of a DER certificate.
#[cfg(feature = "x509")]
pub fn spki_of(cert_der: &[u8]) -> Vec<u8> {
    let cert = que_trust::adapters::x509::parse_der(cert_der).expect("parse cert");
    cert.tbs_certificate.subject_pki.raw.to_vec()
}
