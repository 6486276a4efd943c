use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::domain::PromptResponse;

pub const CORS_REJECTION_MESSAGE: &str = "Not allowed by CORS";

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";
const PREFLIGHT_MAX_AGE: &str = "86400";

/// Origin allow-list for browser callers.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allow_any: bool,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        let allow_any = allowed_origins.iter().any(|o| o == "*");
        let allowed_origins = allowed_origins
            .into_iter()
            .map(|o| o.trim_end_matches('/').to_string())
            .collect();
        Self {
            allowed_origins,
            allow_any,
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.allow_any || self.allowed_origins.iter().any(|o| o == origin)
    }
}

/// Axum middleware enforcing [`CorsPolicy`] ahead of every handler.
///
/// Requests without an `Origin` header are not browser cross-origin calls and
/// pass through untouched. Disallowed origins are answered with 403 here, so
/// nothing downstream runs or logs. Allowed preflights are answered here too.
pub async fn cors_gate(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();
    let Some(origin) = origin else {
        return next.run(request).await;
    };

    let allowed = origin.to_str().map(|o| policy.allows(o)).unwrap_or(false);
    if !allowed {
        warn!("Rejected request from origin {:?}", origin);
        return (
            StatusCode::FORBIDDEN,
            Json(PromptResponse::failure(CORS_REJECTION_MESSAGE)),
        )
            .into_response();
    }

    let is_preflight = request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    let mut response = if is_preflight {
        debug!("Answering CORS preflight for {:?}", origin);
        preflight_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.append(header::VARY, HeaderValue::from_static("Origin"));
    response
}

fn preflight_response() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_origin_match_is_required() {
        let policy = CorsPolicy::new(vec!["https://chat.example.com".to_string()]);
        assert!(policy.allows("https://chat.example.com"));
        assert!(!policy.allows("https://evil.example.com"));
        assert!(!policy.allows("http://chat.example.com"));
    }

    #[test]
    fn trailing_slash_in_config_is_ignored() {
        let policy = CorsPolicy::new(vec!["http://localhost:5173/".to_string()]);
        assert!(policy.allows("http://localhost:5173"));
    }

    #[test]
    fn wildcard_allows_everything() {
        let policy = CorsPolicy::new(vec!["*".to_string()]);
        assert!(policy.allows("https://anything.test"));
    }

    #[test]
    fn empty_policy_allows_nothing() {
        assert!(!CorsPolicy::default().allows("http://localhost:5173"));
    }
}
