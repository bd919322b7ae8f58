use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;
use kernel::KernelError;
use std::sync::Arc;

use crate::error::ErrorStatus;

pub static API_KEY_HEADER: &str = "api-key";
static API_KEYS: &str = "API_KEYS";

#[derive(Clone, Default)]
pub struct AccessKey(Option<Arc<str>>);

impl AccessKey {
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if secret.is_empty() {
            Self(None)
        } else {
            Self(Some(Arc::from(secret)))
        }
    }

    pub fn from_env() -> Self {
        match dotenvy::var(API_KEYS) {
            Ok(secret) => Self::new(secret),
            Err(_) => {
                tracing::warn!("{API_KEYS} is not set, mutating routes are open");
                Self::default()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn validate(&self, supplied: Option<&str>) -> bool {
        match (&self.0, supplied) {
            (Some(secret), Some(supplied)) => secret.as_ref() == supplied,
            _ => false,
        }
    }
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessKey")
            .field(&self.0.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub fn supplied_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
}

pub fn invalid_key() -> ErrorStatus {
    ErrorStatus::from(KernelError::Unauthorized.with_detail("Invalid API Key"))
}

pub async fn require_api_key(
    State(key): State<AccessKey>,
    request: Request,
    next: Next,
) -> Result<Response, ErrorStatus> {
    let read_only = matches!(
        *request.method(),
        Method::GET | Method::HEAD | Method::OPTIONS
    );
    if read_only || !key.is_configured() {
        return Ok(next.run(request).await);
    }
    if key.validate(supplied_key(request.headers())) {
        Ok(next.run(request).await)
    } else {
        Err(invalid_key())
    }
}

#[cfg(test)]
mod test {
    use super::AccessKey;

    #[test]
    fn only_exact_match_validates() {
        let key = AccessKey::new("s3cret");
        assert!(key.validate(Some("s3cret")));
        assert!(!key.validate(Some("S3CRET")));
        assert!(!key.validate(Some(" s3cret")));
        assert!(!key.validate(Some("s3cret ")));
        assert!(!key.validate(Some("")));
        assert!(!key.validate(None));
    }

    #[test]
    fn unconfigured_key_never_validates() {
        let key = AccessKey::new("");
        assert!(!key.is_configured());
        assert!(!key.validate(Some("")));
        assert!(!AccessKey::default().validate(Some("anything")));
    }

    #[test]
    fn secret_is_not_printed() {
        let key = AccessKey::new("s3cret");
        assert!(!format!("{key:?}").contains("s3cret"));
    }
}
