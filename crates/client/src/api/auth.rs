// Authentication

use reqwest::Method;
use siteline_core::{Action, AuthResponse, EntityKind, LoginRequest, Operation};

use crate::error::Result;
use crate::http::ApiClient;

const LOGIN: Operation = Operation::new(EntityKind::Auth, Action::Login);

impl ApiClient {
    /// Exchange credentials for a bearer token. Storing it is up to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send_json(LOGIN, Method::POST, &["auth", "login"], &request)
            .await
    }
}
