// crates/engine/build.rs
use std::fs;

const DATASET: &str = "src/domain/roots/mozilla_spki_sha256.txt";

fn main() {
    let f = |n| std::env::var(format!("CARGO_FEATURE_{}", n)).is_ok();

    if f("OPENSSL") && !f("X509") {
        panic!("feature 'openssl' requires 'x509'");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={DATASET}");

    let data = fs::read_to_string(DATASET)
        .unwrap_or_else(|e| panic!("cannot read embedded dataset {DATASET}: {e}"));

    let mut count = 0usize;
    for (idx, line) in data.lines().enumerate() {
        let entry = line.trim_end_matches('\r');
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        let well_formed = entry.len() == 64
            && entry.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !well_formed {
            panic!("{DATASET}:{}: not a 64-character lowercase hex SPKI digest: {entry:?}", idx + 1);
        }
        count += 1;
    }
    if count == 0 {
        println!("cargo:warning=embedded trust dataset {DATASET} has no entries");
    }
}
