use axum_extra::extract::cookie::CookieJar;
use home_types::SessionToken;
use http::{HeaderMap, HeaderValue};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CookieSettings {
    pub cookie_name: String,
    pub secure: bool,
    pub max_age_secs: u64,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            cookie_name: "session_token".into(),
            secure: true,
            max_age_secs: 604_800,
        }
    }
}

/// Reads the bearer token out of the session cookie, if any.
pub fn session_from_headers(headers: &HeaderMap, settings: &CookieSettings) -> Option<SessionToken> {
    let jar = CookieJar::from_headers(headers);
    jar.get(&settings.cookie_name)
        .and_then(|cookie| SessionToken::parse(cookie.value()))
}

/// `Set-Cookie` value storing the session token.
pub fn session_cookie(token: &SessionToken, settings: &CookieSettings) -> Option<HeaderValue> {
    let secure = if settings.secure { " Secure;" } else { "" };
    let cookieValue = format!(
        "{}={}; HttpOnly;{secure} SameSite=Strict; Path=/; Max-Age={}",
        settings.cookie_name,
        token.as_str(),
        settings.max_age_secs
    );
    HeaderValue::from_str(&cookieValue).ok()
}

/// `Set-Cookie` value expiring the session cookie.
pub fn clear_session_cookie(settings: &CookieSettings) -> HeaderValue {
    let secure = if settings.secure { " Secure;" } else { "" };
    let cookieValue = format!(
        "{}=; HttpOnly;{secure} SameSite=Strict; Path=/; Max-Age=0",
        settings.cookie_name
    );
    HeaderValue::from_str(&cookieValue).unwrap_or_else(|_| HeaderValue::from_static(""))
}
