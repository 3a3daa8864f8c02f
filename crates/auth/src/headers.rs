use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers attached to every request against the issue API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub authorization: String,
    pub content_type: &'static str,
}

/// Derive HTTP Basic-Auth headers from an account email and API token.
pub fn build_headers(email: &str, api_token: &str) -> AuthHeaders {
    let credentials = STANDARD.encode(format!("{email}:{api_token}"));
    AuthHeaders {
        authorization: format!("Basic {credentials}"),
        content_type: JSON_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_headers() {
        let headers = build_headers("test_email", "test_token");
        let expected = format!("Basic {}", STANDARD.encode("test_email:test_token"));
        assert_eq!(headers.authorization, expected);
        assert_eq!(headers.content_type, "application/json");
    }

    #[test]
    fn test_build_headers_known_value() {
        let headers = build_headers("user@example.com", "abc123");
        assert_eq!(
            headers.authorization,
            "Basic dXNlckBleGFtcGxlLmNvbTphYmMxMjM="
        );
    }

    #[test]
    fn test_build_headers_token_with_colon() {
        let headers = build_headers("me", "to:ken");
        let encoded = headers.authorization.trim_start_matches("Basic ");
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "me:to:ken");
    }
}
