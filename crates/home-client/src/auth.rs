use home_types::{LoginRequest, LoginResponse, SessionToken};
use reqwest::StatusCode;
use tracing::debug;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `POST /auth/login`. Returns the bearer token to keep in the session.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionToken, ClientError> {
        let response: LoginResponse = self
            .send_json(self.post("auth/login").json(credentials))
            .await?;

        let token = SessionToken::parse(&response.access_token).ok_or(ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: Some("login response carried an empty token".into()),
        })?;

        debug!("login succeeded");
        Ok(token)
    }
}
