use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a purpose failure.
///
/// Identity fields, joined with `|`:
/// - code
/// - purpose number (empty for tool-level findings)
pub fn fingerprint_for_purpose(code: &str, purpose: Option<u8>) -> String {
    let purpose = purpose.map(|p| p.to_string()).unwrap_or_default();
    let canonical = [code, purpose.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
