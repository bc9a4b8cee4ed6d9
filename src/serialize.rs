//! Wire encoding for tokens: four base64url segments joined with `.`, plus
//! the JSON header carried in segment 0.
//!
//! Segment order is fixed: `header.ciphertext.iv.tag`. Encoded segments
//! carry no padding; the decoder accepts padded and unpadded input alike.
//! Every parse failure collapses to `MalformedToken` so callers learn
//! nothing about which segment was bad.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::TokenError;
use crate::types::{Header, TokenSegments, TOKEN_SEGMENTS};

/// URL-safe base64: no padding on encode, padding-indifferent on decode.
const URL_SAFE_TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// ASCII delimiter between segments.
pub const SEGMENT_DELIMITER: &str = ".";

/// Join the four segments into the canonical token string.
pub fn encode_token(segments: &TokenSegments) -> String {
    [
        URL_SAFE_TOLERANT.encode(&segments.header),
        URL_SAFE_TOLERANT.encode(&segments.ciphertext),
        URL_SAFE_TOLERANT.encode(&segments.iv),
        URL_SAFE_TOLERANT.encode(&segments.tag),
    ]
    .join(SEGMENT_DELIMITER)
}

/// Split a token into exactly four segments and decode each.
pub fn decode_token(token: &str) -> Result<TokenSegments, TokenError> {
    let segments: Vec<&str> = token.split(SEGMENT_DELIMITER).collect();
    if segments.len() != TOKEN_SEGMENTS {
        return Err(TokenError::MalformedToken);
    }
    let decode = |segment: &str| {
        URL_SAFE_TOLERANT
            .decode(segment)
            .map_err(|_| TokenError::MalformedToken)
    };
    Ok(TokenSegments {
        header: decode(segments[0])?,
        ciphertext: decode(segments[1])?,
        iv: decode(segments[2])?,
        tag: decode(segments[3])?,
    })
}

/// Serialize the `{ "kid": ... }` header for a key-set id.
pub fn encode_header(kid: &str) -> Result<Vec<u8>, TokenError> {
    serde_json::to_vec(&Header {
        kid: kid.to_string(),
    })
    .map_err(|_| TokenError::InvalidArgument("key-set id is not serializable"))
}

/// Decode segment 0 as the token header. The header must hold exactly the
/// `kid` field.
pub fn decode_header(bytes: &[u8]) -> Result<Header, TokenError> {
    serde_json::from_slice(bytes).map_err(|_| TokenError::MalformedToken)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_segments() -> TokenSegments {
        TokenSegments {
            header: br#"{"kid":"1"}"#.to_vec(),
            ciphertext: vec![0xAB; 32],
            iv: vec![0xCD; 16],
            tag: vec![0xEF; 32],
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let segments = sample_segments();
        let token = encode_token(&segments);
        let decoded = decode_token(&token).unwrap();
        assert_eq!(decoded, segments);
    }

    #[test]
    fn test_token_has_four_dot_joined_segments() {
        let token = encode_token(&sample_segments());
        assert_eq!(token.split('.').count(), 4);
    }

    #[test]
    fn test_encoded_segments_carry_no_padding() {
        let token = encode_token(&sample_segments());
        assert!(!token.contains('='));
    }

    #[test]
    fn test_decode_accepts_padded_segments() {
        let segments = sample_segments();
        let padded = encode_token(&segments)
            .split('.')
            .map(|segment| {
                let mut s = segment.to_string();
                while s.len() % 4 != 0 {
                    s.push('=');
                }
                s
            })
            .collect::<Vec<_>>()
            .join(".");
        let decoded = decode_token(&padded).unwrap();
        assert_eq!(decoded, segments);
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert!(matches!(
            decode_token("garbage"),
            Err(TokenError::MalformedToken)
        ));
        assert!(matches!(
            decode_token("a.b.c"),
            Err(TokenError::MalformedToken)
        ));
        assert!(matches!(
            decode_token("a.b.c.d.e"),
            Err(TokenError::MalformedToken)
        ));
        assert!(matches!(decode_token(""), Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_token("!!!.AAAA.AAAA.AAAA"),
            Err(TokenError::MalformedToken)
        ));
        assert!(matches!(
            decode_token("AAAA.AAAA.AAAA.+/=="),
            Err(TokenError::MalformedToken)
        ));
    }

    #[test]
    fn test_header_roundtrip() {
        let bytes = encode_header("keyset-7").unwrap();
        let header = decode_header(&bytes).unwrap();
        assert_eq!(header.kid, "keyset-7");
    }

    #[test]
    fn test_header_wire_shape() {
        let bytes = encode_header("1").unwrap();
        assert_eq!(bytes, br#"{"kid":"1"}"#);
    }

    #[test]
    fn test_decode_header_rejects_unknown_fields() {
        assert!(matches!(
            decode_header(br#"{"kid":"1","extra":true}"#),
            Err(TokenError::MalformedToken)
        ));
    }

    #[test]
    fn test_decode_header_rejects_wrong_shapes() {
        assert!(decode_header(b"[1,2,3]").is_err());
        assert!(decode_header(br#"{"kid":5}"#).is_err());
        assert!(decode_header(b"{}").is_err());
        assert!(decode_header(b"not json").is_err());
        assert!(decode_header(&[0xFF, 0xFE]).is_err());
    }
}
