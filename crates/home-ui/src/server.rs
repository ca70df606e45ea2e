//! Server functions shared by several pages. They run on the server and talk
//! to the listing API with the session read from the request cookie.

use home_types::{Property, PropertyId, PropertySummary, ToggleOutcome};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
pub(crate) mod ssr {
    use home_api::CookieSettings;
    use home_client::{ApiClient, ClientError};
    use home_types::SessionToken;
    use leptos::prelude::*;

    pub fn api() -> Result<ApiClient, ServerFnError> {
        use_context::<ApiClient>().ok_or_else(|| ServerFnError::new("api client unavailable"))
    }

    pub fn cookie_settings() -> CookieSettings {
        use_context::<CookieSettings>().unwrap_or_default()
    }

    pub async fn session() -> Result<Option<SessionToken>, ServerFnError> {
        let headers: http::HeaderMap = leptos_axum::extract().await?;
        Ok(home_api::session::session_from_headers(
            &headers,
            &cookie_settings(),
        ))
    }

    pub fn upstream(e: ClientError) -> ServerFnError {
        ServerFnError::new(e.user_message())
    }
}

#[server]
pub async fn get_properties() -> Result<Vec<PropertySummary>, ServerFnError> {
    let api = ssr::api()?;
    api.list_properties().await.map_err(ssr::upstream)
}

#[server]
pub async fn get_property(id: PropertyId) -> Result<Property, ServerFnError> {
    let api = ssr::api()?;
    api.get_property(id).await.map_err(ssr::upstream)
}

/// `None` when there is no session.
#[server]
pub async fn get_favorites() -> Result<Option<Vec<PropertySummary>>, ServerFnError> {
    let Some(session) = ssr::session().await? else {
        return Ok(None);
    };
    let api = ssr::api()?;
    api.my_favorites(&session)
        .await
        .map(Some)
        .map_err(ssr::upstream)
}

#[server]
pub async fn has_session() -> Result<bool, ServerFnError> {
    Ok(ssr::session().await?.is_some())
}

#[server]
pub async fn toggle_favorite(
    id: PropertyId,
    currently_favorite: bool,
) -> Result<ToggleOutcome, ServerFnError> {
    let api = ssr::api()?;
    let session = ssr::session().await?;

    let outcome =
        home_client::toggle_membership(&api, session.as_ref(), id, currently_favorite).await;
    tracing::debug!("toggle {id}: {outcome:?}");
    Ok(outcome)
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use http::header::SET_COOKIE;
    use leptos_axum::ResponseOptions;

    let responseOptions = expect_context::<ResponseOptions>();
    responseOptions.insert_header(
        SET_COOKIE,
        home_api::session::clear_session_cookie(&ssr::cookie_settings()),
    );
    leptos_axum::redirect("/");

    Ok(())
}

/// Message text without the server function framing.
pub fn error_text(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
