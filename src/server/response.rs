//! Response helpers shared by the item routes.

use axum::{body::Bytes, http::StatusCode, Json};
use serde_json::Value;

use crate::stores::CreateItemRequest;

/// Error half of every handler result: a status plus `{"error": "..."}`.
pub type ErrorResponse = (StatusCode, Json<Value>);

pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Build a JSON error body with the given status.
pub fn respond_with_error(code: StatusCode, message: &str) -> ErrorResponse {
    (code, Json(serde_json::json!({ "error": message })))
}

/// Decode a create/update payload from the raw request body.
///
/// The body is parsed regardless of `Content-Type`. Malformed JSON and
/// type mismatches both map to 400.
pub fn decode_request(body: &Bytes) -> Result<CreateItemRequest, ErrorResponse> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting item payload");
        respond_with_error(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let (code, Json(body)) = respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn test_decode_valid_payload() {
        let body = Bytes::from_static(br#"{"name":"New Item","description":"This is a new item"}"#);
        let request = decode_request(&body).unwrap();
        assert_eq!(request, CreateItemRequest::new("New Item", "This is a new item"));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = Bytes::from_static(br#"{"name":"a","description":"b","id":"forged"}"#);
        assert_eq!(decode_request(&body).unwrap(), CreateItemRequest::new("a", "b"));
    }

    #[test]
    fn test_decode_rejects_bad_payloads() {
        let payloads: [&[u8]; 4] = [b"", b"{", b"not json", br#"{"name":123,"description":"x"}"#];
        for raw in payloads {
            let (code, Json(body)) = decode_request(&Bytes::copy_from_slice(raw)).unwrap_err();
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], INVALID_PAYLOAD);
        }
    }
}
