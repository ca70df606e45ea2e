use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::session::{session_from_headers, CookieSettings};

/// Page routes that only make sense with a session.
pub const PROTECTED_PATHS: &[&str] = &["/favorites"];

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub cookie: CookieSettings,
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.iter().any(|prefix| {
        path == *prefix || path.starts_with(&format!("{prefix}/"))
    })
}

/// Middleware for page routes: redirects to /login when a protected page is
/// requested without a session cookie. Everything else passes through.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if !is_protected(&path) {
        return next.run(request).await;
    }

    if session_from_headers(request.headers(), &state.cookie).is_none() {
        debug!("no session for {path}, redirecting to /login");
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}
