//! # X-VERIFY Checksum
//!
//! PhonePe authenticates pay requests with a SHA-256 checksum over the
//! base64 payload, the API path, and the merchant salt key:
//!
//! ```text
//! X-VERIFY = hex(sha256(base64Payload + apiPath + saltKey)) + "###" + saltIndex
//! ```
//!
//! The concatenation order and the literal `###` separator are part of
//! the wire contract and must be reproduced bit-exact.

use crate::constants::CHECKSUM_SEPARATOR;
use sha2::{Digest, Sha256};

/// Compute the `X-VERIFY` header value for a pay request.
///
/// Pure function of its inputs; identical arguments always produce an
/// identical signature.
pub fn compute_x_verify(
    base64_payload: &str,
    api_path: &str,
    salt_key: &str,
    salt_index: &str,
) -> String {
    let checksum_input = format!("{}{}{}", base64_payload, api_path, salt_key);
    let digest = Sha256::digest(checksum_input.as_bytes());
    format!(
        "{}{}{}",
        hex::encode(digest),
        CHECKSUM_SEPARATOR,
        salt_index
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of the empty string
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    // SHA-256 of "abc"
    const ABC_SHA256: &str =
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            compute_x_verify("", "", "", "1"),
            format!("{}###1", EMPTY_SHA256)
        );
        // The three inputs are concatenated in order before hashing
        assert_eq!(
            compute_x_verify("a", "b", "c", "2"),
            format!("{}###2", ABC_SHA256)
        );
    }

    #[test]
    fn test_determinism() {
        let a = compute_x_verify("eyJmb28iOiJiYXIifQ==", "/pg/v1/pay", "salt", "1");
        let b = compute_x_verify("eyJmb28iOiJiYXIifQ==", "/pg/v1/pay", "salt", "1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_salt_changes_signature() {
        let a = compute_x_verify("payload", "/pg/v1/pay", "salt-one", "1");
        let b = compute_x_verify("payload", "/pg/v1/pay", "salt-two", "1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_signature_shape() {
        let sig = compute_x_verify("payload", "/pg/v1/pay", "salt", "3");
        let (digest, index) = sig.split_once("###").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(index, "3");
    }
}
