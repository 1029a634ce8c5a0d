use axum::Json;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use headers::authorization::Basic;
use headers::{Authorization, HeaderMapExt};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::config::SecurityConfig;
use crate::router::PayrollState;

const BASIC_CHALLENGE: &str = r#"Basic realm="payroll""#;

/// Ensure the inbound request carries the configured Basic credentials.
pub fn ensure_authorized(headers: &HeaderMap, security: &SecurityConfig) -> Result<(), Response> {
    if let Some(auth) = headers.typed_get::<Authorization<Basic>>()
        && credentials_match(&auth, security)
    {
        return Ok(());
    }

    if let Some(login) = security.login_redirect.as_deref() {
        return Err((StatusCode::FOUND, [(header::LOCATION, login.to_string())]).into_response());
    }

    Err((
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(BASIC_CHALLENGE),
        )],
        Json(json!({"error": "unauthorized", "reason": "invalid or missing credentials"})),
    )
        .into_response())
}

fn credentials_match(auth: &Authorization<Basic>, security: &SecurityConfig) -> bool {
    let user_ok = auth
        .username()
        .as_bytes()
        .ct_eq(security.username.as_bytes());
    let password_ok = auth
        .password()
        .as_bytes()
        .ct_eq(security.password.as_bytes());
    bool::from(user_ok & password_ok)
}

/// Router-wide layer: public paths and disabled security pass straight through.
pub async fn require_basic_auth(
    State(state): State<PayrollState>,
    req: Request,
    next: Next,
) -> Response {
    let security = &state.security;
    if !security.enabled || security.is_public(req.uri().path()) {
        return next.run(req).await;
    }

    if let Err(rejection) = ensure_authorized(req.headers(), security) {
        debug!(path = %req.uri().path(), "rejected unauthenticated request");
        return rejection;
    }
    next.run(req).await
}
