// Response parsing: the body shape is decided once, at the boundary
use serde::de::DeserializeOwned;
use serde_json::Value;
use shopharness_common::{HarnessError, HarnessResult};

/// A response body, classified exactly once when it comes off the wire.
///
/// The upstream API mixes JSON payloads with bare error strings; instead
/// of sniffing content with regexes downstream, the body is parsed here
/// and every consumer works with the tagged result.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    /// Body parsed as JSON.
    Json(Value),
    /// Non-empty body that is not valid JSON.
    Text(String),
    /// Empty or whitespace-only body.
    Empty,
}

impl ParsedBody {
    /// Classify raw body text.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// The JSON value, if this body is JSON.
    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Decode the JSON body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> HarnessResult<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value.clone())
                .map_err(|err| HarnessError::serialization(format!("response decode: {err}"))),
            Self::Text(text) => Err(HarnessError::serialization(format!(
                "expected JSON body, got text: {text}"
            ))),
            Self::Empty => Err(HarnessError::serialization("expected JSON body, got empty body")),
        }
    }
}

/// Status plus classified body, as returned by every client method.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ParsedBody,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// The `responseCode` field the upstream API tunnels inside otherwise
    /// 200-status JSON bodies, when present.
    pub fn response_code(&self) -> Option<u16> {
        self.body
            .json()
            .and_then(|value| value.get("responseCode"))
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_bodies_are_tagged_json() {
        let body = ParsedBody::parse(r#"{"responseCode": 200, "message": "User exists!"}"#);
        assert_eq!(body.json().unwrap()["message"], "User exists!");
    }

    #[test]
    fn non_json_bodies_are_tagged_text_not_sniffed() {
        // An error-looking string stays text; no content heuristics
        let body = ParsedBody::parse("Method Not Allowed");
        assert_eq!(body, ParsedBody::Text("Method Not Allowed".to_string()));

        // So does a non-error string
        let body = ParsedBody::parse("all good");
        assert_eq!(body, ParsedBody::Text("all good".to_string()));
    }

    #[test]
    fn blank_bodies_are_tagged_empty() {
        assert_eq!(ParsedBody::parse(""), ParsedBody::Empty);
        assert_eq!(ParsedBody::parse("  \n"), ParsedBody::Empty);
    }

    #[test]
    fn decode_extracts_typed_values() {
        #[derive(Debug, Deserialize)]
        struct Message {
            message: String,
        }

        let body = ParsedBody::parse(r#"{"message": "User created!"}"#);
        let decoded: Message = body.decode().unwrap();
        assert_eq!(decoded.message, "User created!");
    }

    #[test]
    fn decode_rejects_text_and_empty_bodies() {
        assert!(ParsedBody::Text("nope".to_string()).decode::<Value>().is_err());
        assert!(ParsedBody::Empty.decode::<Value>().is_err());
    }

    #[test]
    fn response_code_reads_the_tunnelled_field() {
        let response = ApiResponse {
            status: 200,
            body: ParsedBody::Json(json!({"responseCode": 405, "message": "This request method is not supported."})),
        };
        assert!(response.is_success());
        assert_eq!(response.response_code(), Some(405));

        let response = ApiResponse { status: 200, body: ParsedBody::Json(json!({"ok": true})) };
        assert_eq!(response.response_code(), None);
    }

    #[test]
    fn status_helpers_use_status_not_content() {
        let ok = ApiResponse { status: 201, body: ParsedBody::Empty };
        assert!(ok.is_success());
        assert!(!ok.is_error());

        let not_found = ApiResponse {
            status: 404,
            body: ParsedBody::Text("error: not found".to_string()),
        };
        assert!(not_found.is_error());
    }
}
