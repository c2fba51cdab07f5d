//! Tamper detection tests
//!
//! Every single-bit change to a valid token must be rejected, either because
//! the result no longer frames as a token or because the signature no longer
//! matches.

use ajwt::*;

use serde_json::json;

fn create_token() -> String {
    let mut payload = Payload::new();
    payload.insert("user".into(), json!("alice"));
    payload.insert("admin".into(), json!(false));
    payload.insert("quota".into(), json!(1024));

    Encoder::new("key")
        .timestamp(1_455_753_600)
        .nonce("abcdefghijklmnopqrstuvwx")
        .encode(&payload)
        .unwrap()
}

fn assert_rejected(tampered: &str) {
    match Decoder::new("key").decode(tampered) {
        Err(e) => assert!(
            matches!(e.kind(), ErrorKind::InvalidSignature | ErrorKind::InvalidInput),
            "unexpected error kind for {tampered:?}: {e}"
        ),
        Ok(payload) => panic!("tampered token accepted: {tampered:?} -> {payload:?}"),
    }
}

#[test]
fn test_every_bit_flip_is_rejected() {
    let token = create_token();
    let bytes = token.as_bytes();

    for index in 0..bytes.len() {
        // Low seven bits only, so the result stays ASCII
        for bit in 0..7 {
            let mut tampered = bytes.to_vec();
            tampered[index] ^= 1 << bit;
            let tampered = String::from_utf8(tampered).unwrap();
            assert_rejected(&tampered);
        }
    }
}

#[test]
fn test_swapped_signature_is_rejected() {
    let first = create_token();
    let second = Encoder::new("key")
        .timestamp(1_455_753_600)
        .nonce("different-nonce")
        .encode(&Payload::new())
        .unwrap();

    let (payload_b64, _) = first.split_once('.').unwrap();
    let (_, signature_b64) = second.split_once('.').unwrap();

    assert!(matches!(
        Decoder::new("key").decode(&format!("{payload_b64}.{signature_b64}")),
        Err(Error::InvalidSignature)
    ));
}

#[test]
fn test_truncated_signature_is_rejected() {
    let token = create_token();
    let (payload_b64, _) = token.split_once('.').unwrap();
    let short = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, [0u8; 32]);

    assert!(matches!(
        Decoder::new("key").decode(&format!("{payload_b64}.{short}")),
        Err(Error::InvalidSignature)
    ));
}

#[test]
fn test_untampered_token_is_accepted() {
    let token = create_token();
    let payload = Decoder::new("key").decode(&token).unwrap();
    assert_eq!(payload["user"], json!("alice"));
    assert_eq!(payload["quota"], json!(1024));
}
