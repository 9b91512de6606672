//! Lenient JSON body extractor

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor.
///
/// A request without a JSON content type, or with an empty body, yields
/// `T::default()` so handlers see an empty object. Malformed JSON is rejected
/// with a 400 in the API error format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Json(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::json(
                rejection.status(),
                format!("Failed to read request body: {}", rejection.body_text()),
            )
        })?;

        if bytes.is_empty() {
            return Ok(Json(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Json)
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Payload {
        #[serde(default)]
        name: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_parses_json_body() {
        let req = request(Some("application/json"), r#"{"name":"Liquid"}"#);
        let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name.as_deref(), Some("Liquid"));
    }

    #[tokio::test]
    async fn test_charset_parameter_is_accepted() {
        let req = request(Some("application/json; charset=utf-8"), r#"{"name":"C9"}"#);
        let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name.as_deref(), Some("C9"));
    }

    #[tokio::test]
    async fn test_missing_content_type_yields_default() {
        let req = request(None, r#"{"name":"ignored"}"#);
        let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_yields_default() {
        let req = request(Some("application/json"), "");
        let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let req = request(Some("application/json"), "{not json");
        let err = Json::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Invalid JSON body"));
    }

    #[test]
    fn test_json_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
        assert_eq!(json.len(), 5);
    }
}
