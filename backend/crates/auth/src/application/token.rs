//! Session Token Signing
//!
//! Tokens are `<session_id>.<base64url(HMAC-SHA256(session_id))>`. The
//! signature stops clients from minting or guessing session references;
//! the session row itself is the authority on validity and expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Generate a signed session token
pub fn sign_session_token(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a session token, returning the session ID
pub fn verify_session_token(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_verify_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(session_id, &SECRET);

        assert_eq!(verify_session_token(&token, &SECRET), Some(session_id));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(session_id, &SECRET);

        // Different session id, same signature
        let other_id = Uuid::new_v4();
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{}.{}", other_id, signature);
        assert_eq!(verify_session_token(&forged, &SECRET), None);

        // Wrong secret
        let other_secret = [8u8; 32];
        assert_eq!(verify_session_token(&token, &other_secret), None);
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert_eq!(verify_session_token("", &SECRET), None);
        assert_eq!(verify_session_token("no-dot-here", &SECRET), None);
        assert_eq!(verify_session_token("a.b.c", &SECRET), None);
        assert_eq!(verify_session_token("not-a-uuid.!!!", &SECRET), None);
    }
}
