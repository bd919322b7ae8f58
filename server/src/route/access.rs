use crate::access::{invalid_key, supplied_key, AccessKey};
use axum::extract::{FromRef, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidKeyResponse {
    valid: bool,
}

pub trait AccessRouter {
    fn route_access(self) -> Self;
}

impl<S> AccessRouter for Router<S>
where
    S: Clone + Send + Sync + 'static,
    AccessKey: FromRef<S>,
{
    fn route_access(self) -> Self {
        self.route(
            "/validate_key/",
            get(
                |State(key): State<AccessKey>, headers: HeaderMap| async move {
                    if key.validate(supplied_key(&headers)) {
                        Ok(Json(ValidKeyResponse { valid: true }))
                    } else {
                        Err(invalid_key())
                    }
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    use super::AccessRouter;
    use crate::access::{require_api_key, AccessKey, API_KEY_HEADER};

    fn app(key: AccessKey) -> Router {
        Router::new()
            .route(
                "/authors/",
                get(|| async { "listed" }).post(|| async { "created" }),
            )
            .route_access()
            .layer(from_fn_with_state(key.clone(), require_api_key))
            .with_state(key)
    }

    fn request(method: &str, uri: &str, key: Option<&'static str>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let builder = match key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    async fn detail(response: axum::response::Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        body["detail"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn reads_need_no_key() {
        let response = app(AccessKey::new("s3cret"))
            .oneshot(request("GET", "/authors/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mutation_without_key_is_unauthorized() {
        let response = app(AccessKey::new("s3cret"))
            .oneshot(request("POST", "/authors/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(detail(response).await, "Invalid API Key");
    }

    #[tokio::test]
    async fn mutation_with_wrong_case_is_unauthorized() {
        let response = app(AccessKey::new("s3cret"))
            .oneshot(request("POST", "/authors/", Some("S3CRET")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn mutation_with_key_passes() {
        let response = app(AccessKey::new("s3cret"))
            .oneshot(request("POST", "/authors/", Some("s3cret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unconfigured_guard_lets_mutations_through() {
        let response = app(AccessKey::default())
            .oneshot(request("POST", "/authors/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn validate_key_answers() {
        let key = AccessKey::new("s3cret");
        let ok = app(key.clone())
            .oneshot(request("GET", "/validate_key/", Some("s3cret")))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let padded = app(key.clone())
            .oneshot(request("GET", "/validate_key/", Some("s3cret ")))
            .await
            .unwrap();
        assert_eq!(padded.status(), StatusCode::UNAUTHORIZED);

        let missing = app(key)
            .oneshot(request("GET", "/validate_key/", None))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn validate_key_without_secret_always_fails() {
        let response = app(AccessKey::default())
            .oneshot(request("GET", "/validate_key/", Some("")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
