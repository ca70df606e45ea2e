use async_trait::async_trait;
use home_types::{
    FavoriteMethod, FavoriteSet, PropertyId, PropertySummary, SessionToken, ToggleOutcome,
};
use tracing::{debug, warn};

use crate::{ApiClient, ClientError};

/// Per-resource favorite endpoint: `POST`/`DELETE /properties/{id}/favorite`.
#[async_trait]
pub trait FavoriteEndpoint: Send + Sync {
    async fn send_favorite(
        &self,
        session: &SessionToken,
        id: PropertyId,
        method: FavoriteMethod,
    ) -> Result<(), ClientError>;
}

#[async_trait]
impl FavoriteEndpoint for ApiClient {
    async fn send_favorite(
        &self,
        session: &SessionToken,
        id: PropertyId,
        method: FavoriteMethod,
    ) -> Result<(), ClientError> {
        let path = format!("properties/{id}/favorite");
        let request = match method {
            FavoriteMethod::Post => self.post(&path),
            FavoriteMethod::Delete => self.delete(&path),
        };
        self.send(Self::authorized(request, session)).await?;
        Ok(())
    }
}

impl ApiClient {
    /// `GET /properties/favorites/me`
    pub async fn my_favorites(
        &self,
        session: &SessionToken,
    ) -> Result<Vec<PropertySummary>, ClientError> {
        let request = Self::authorized(self.get("properties/favorites/me"), session);
        self.send_json(request).await
    }

    pub async fn favorite_set(&self, session: &SessionToken) -> Result<FavoriteSet, ClientError> {
        let favorites = self.my_favorites(session).await?;
        Ok(favorites.into_iter().map(|p| p.id).collect())
    }
}

/// Flips membership of `id` against the remote endpoint.
///
/// Without a session nothing is sent and `LoginRequired` is returned. On any
/// failure the set is left as it was and the outcome carries the reason.
pub async fn toggle<E>(
    endpoint: &E,
    session: Option<&SessionToken>,
    favorites: &mut FavoriteSet,
    id: PropertyId,
) -> ToggleOutcome
where
    E: FavoriteEndpoint + ?Sized,
{
    let Some(session) = session else {
        debug!("favorite toggle for {id} skipped: no session");
        return ToggleOutcome::LoginRequired;
    };

    let method = favorites.method_for(id);
    let outcome = match endpoint.send_favorite(session, id, method).await {
        Ok(()) => ToggleOutcome::applied(id, method),
        Err(e) => {
            warn!("favorite {method:?} for {id} failed: {e}");
            ToggleOutcome::Failed {
                id,
                message: e.user_message(),
            }
        }
    };

    favorites.reconcile(&outcome);
    outcome
}

/// Toggle driven by the caller's view of membership rather than a full set:
/// `currently_favorite == true` sends DELETE, `false` sends POST.
pub async fn toggle_membership<E>(
    endpoint: &E,
    session: Option<&SessionToken>,
    id: PropertyId,
    currently_favorite: bool,
) -> ToggleOutcome
where
    E: FavoriteEndpoint + ?Sized,
{
    let mut favorites = FavoriteSet::new();
    if currently_favorite {
        favorites.apply(id, FavoriteMethod::Post);
    }
    toggle(endpoint, session, &mut favorites, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{DELETE, GET, POST};
    use httpmock::MockServer;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every call and answers with a fixed status.
    struct RecordingEndpoint {
        calls: Mutex<Vec<(PropertyId, FavoriteMethod)>>,
        fail: bool,
    }

    impl RecordingEndpoint {
        fn new(fail: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn calls(&self) -> Vec<(PropertyId, FavoriteMethod)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FavoriteEndpoint for RecordingEndpoint {
        async fn send_favorite(
            &self,
            _session: &SessionToken,
            id: PropertyId,
            method: FavoriteMethod,
        ) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push((id, method));
            if self.fail {
                Err(ClientError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: None,
                })
            } else {
                Ok(())
            }
        }
    }

    fn session() -> SessionToken {
        SessionToken::parse("tok-abc").unwrap()
    }

    fn set(ids: &[u64]) -> FavoriteSet {
        ids.iter().copied().map(PropertyId).collect()
    }

    #[tokio::test]
    async fn absent_ids_are_posted_and_present_ids_deleted() {
        let endpoint = RecordingEndpoint::new(false);
        let mut favorites = set(&[2]);
        let token = session();

        toggle(&endpoint, Some(&token), &mut favorites, PropertyId(1)).await;
        toggle(&endpoint, Some(&token), &mut favorites, PropertyId(2)).await;

        assert_eq!(
            endpoint.calls(),
            vec![
                (PropertyId(1), FavoriteMethod::Post),
                (PropertyId(2), FavoriteMethod::Delete),
            ]
        );
        assert_eq!(favorites, set(&[1]));
    }

    #[tokio::test]
    async fn missing_session_sends_nothing() {
        let endpoint = RecordingEndpoint::new(false);
        let mut favorites = set(&[5]);

        let outcome = toggle(&endpoint, None, &mut favorites, PropertyId(5)).await;

        assert_eq!(outcome, ToggleOutcome::LoginRequired);
        assert!(endpoint.calls().is_empty());
        assert_eq!(favorites, set(&[5]));
    }

    #[tokio::test]
    async fn failure_leaves_set_unchanged() {
        let endpoint = RecordingEndpoint::new(true);
        let mut favorites = set(&[5]);

        let outcome = toggle(&endpoint, Some(&session()), &mut favorites, PropertyId(5)).await;

        assert!(matches!(outcome, ToggleOutcome::Failed { id: PropertyId(5), .. }));
        assert_eq!(endpoint.calls(), vec![(PropertyId(5), FavoriteMethod::Delete)]);
        assert_eq!(favorites, set(&[5]));
    }

    #[tokio::test]
    async fn membership_flag_picks_the_method() {
        let endpoint = RecordingEndpoint::new(false);
        let token = session();

        let removed = toggle_membership(&endpoint, Some(&token), PropertyId(8), true).await;
        let added = toggle_membership(&endpoint, Some(&token), PropertyId(9), false).await;

        assert_eq!(
            endpoint.calls(),
            vec![
                (PropertyId(8), FavoriteMethod::Delete),
                (PropertyId(9), FavoriteMethod::Post),
            ]
        );
        assert_eq!(removed, ToggleOutcome::Removed(PropertyId(8)));
        assert_eq!(added, ToggleOutcome::Added(PropertyId(9)));
    }

    #[tokio::test]
    async fn membership_toggle_without_session_sends_nothing() {
        let endpoint = RecordingEndpoint::new(false);

        let outcome = toggle_membership(&endpoint, None, PropertyId(8), true).await;

        assert_eq!(outcome, ToggleOutcome::LoginRequired);
        assert!(endpoint.calls().is_empty());
    }

    #[tokio::test]
    async fn membership_toggle_failure_is_reported() {
        let endpoint = RecordingEndpoint::new(true);

        let outcome = toggle_membership(&endpoint, Some(&session()), PropertyId(8), false).await;

        assert_eq!(endpoint.calls(), vec![(PropertyId(8), FavoriteMethod::Post)]);
        assert!(matches!(outcome, ToggleOutcome::Failed { id: PropertyId(8), .. }));
    }

    #[tokio::test]
    async fn empty_set_toggle_posts_with_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/properties/5/favorite")
                .header("Authorization", "Bearer tok-abc");
            then.status(201).json_body(json!({"ok": true}));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let mut favorites = FavoriteSet::new();
        let outcome = toggle(&client, Some(&session()), &mut favorites, PropertyId(5)).await;

        mock.assert();
        assert_eq!(outcome, ToggleOutcome::Added(PropertyId(5)));
        assert_eq!(favorites, set(&[5]));
    }

    #[tokio::test]
    async fn server_error_on_delete_keeps_membership() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/properties/5/favorite")
                .header("Authorization", "Bearer tok-abc");
            then.status(500);
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let mut favorites = set(&[5]);
        let outcome = toggle(&client, Some(&session()), &mut favorites, PropertyId(5)).await;

        mock.assert();
        assert!(matches!(outcome, ToggleOutcome::Failed { .. }));
        assert_eq!(favorites, set(&[5]));
    }

    #[tokio::test]
    async fn unreachable_server_is_reported_not_raised() {
        let client = ApiClient::new("http://127.0.0.1:9", None).unwrap();
        let mut favorites = FavoriteSet::new();

        let outcome = toggle(&client, Some(&session()), &mut favorites, PropertyId(3)).await;

        assert!(matches!(outcome, ToggleOutcome::Failed { id: PropertyId(3), .. }));
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn favorite_set_is_seeded_from_my_favorites() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/properties/favorites/me")
                .header("Authorization", "Bearer tok-abc");
            then.status(200).json_body(json!([
                {"id": 4, "title": "A", "location": "X", "price": 1, "surface": 1, "images": []},
                {"id": 9, "title": "B", "location": "Y", "price": 2, "surface": 2, "images": []}
            ]));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let favorites = client.favorite_set(&session()).await.unwrap();

        mock.assert();
        assert_eq!(favorites, set(&[4, 9]));
    }

    #[tokio::test]
    async fn my_favorites_without_valid_token_is_unauthorized() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/properties/favorites/me");
            then.status(401).json_body(json!({"message": "Unauthorized"}));
        });

        let client = ApiClient::new(&server.base_url(), None).unwrap();
        let err = client.my_favorites(&session()).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }
}
