//! Uniform response envelope
//!
//! Every endpoint answers with `{success, message, data, error}`.
//! Exactly one of `data` / `error` is present; absent fields are
//! omitted from the body entirely.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with a payload.
    pub fn ok(message: &str, data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                message: Some(message.to_owned()),
                data: Some(data),
                error: None,
            }),
        )
    }

    /// 201 with the stored record.
    pub fn created(message: &str, data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                message: Some(message.to_owned()),
                data: Some(data),
                error: None,
            }),
        )
    }
}

impl Envelope<serde_json::Value> {
    /// 200 with no payload (update/delete acknowledgements).
    pub fn ok_empty(message: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                message: Some(message.to_owned()),
                data: None,
                error: None,
            }),
        )
    }

    /// Failure body; the only constructor that sets `error`.
    pub fn failure(status: StatusCode, error: String) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                message: None,
                data: None,
                error: Some(error),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_omits_error() {
        let (status, Json(body)) = Envelope::ok("fetched", vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn empty_success_omits_data_and_error() {
        let (status, Json(body)) = Envelope::ok_empty("deleted");
        assert_eq!(status, StatusCode::OK);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "deleted");
        assert!(json.get("data").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_body_omits_data() {
        let (status, Json(body)) =
            Envelope::failure(StatusCode::NOT_FOUND, "user '7' not found".into());
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "user '7' not found");
        assert!(json.get("data").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn created_is_201() {
        let (status, _) = Envelope::created("created", serde_json::json!({"id": "P1"}));
        assert_eq!(status, StatusCode::CREATED);
    }
}
