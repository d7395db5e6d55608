//! Account repository - registration, auth and profile

use std::sync::Arc;

use shared::client::{CurrentAccountResponse, LoginRequest, LoginResponse, RegisterRequest};
use shared::models::{Account, AccountUpdate};

use crate::error::ClientError;
use crate::flow::{OutcomeStream, server_flow};
use crate::http::{HttpClient, NetworkHttpClient};

/// Account repository
#[derive(Debug)]
pub struct AccountRepository<C = NetworkHttpClient> {
    http: Arc<C>,
}

impl<C> Clone for AccountRepository<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient + 'static> AccountRepository<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self { http }
    }

    /// Register a new rider account
    pub fn register(&self, request: RegisterRequest) -> OutcomeStream<Account> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                if request.username.trim().is_empty() || request.password.is_empty() {
                    return Err(ClientError::MissingData(
                        "username and password are required".into(),
                    ));
                }
                http.post_data::<Account, _>("api/auth/register", &request)
                    .await
            },
            |account| account,
        )
    }

    /// Login and store the bearer token on the transport
    pub fn login(&self, username: &str, password: &str) -> OutcomeStream<LoginResponse> {
        let http = Arc::clone(&self.http);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        server_flow(
            move || async move {
                if request.username.trim().is_empty() || request.password.is_empty() {
                    return Err(ClientError::MissingData(
                        "username and password are required".into(),
                    ));
                }
                let resp: LoginResponse = http.post_data("api/auth/login", &request).await?;
                http.set_token(Some(resp.token.clone()));
                tracing::info!(username = %resp.account.username, "logged in");
                Ok(resp)
            },
            |resp| resp,
        )
    }

    /// Logout and drop the stored token
    ///
    /// The token is cleared even when the server call fails; an abandoned
    /// server session expires on its own.
    pub fn logout(&self) -> OutcomeStream<()> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                let result = http.post_empty::<shared::ApiResponse<()>>("api/auth/logout").await;
                http.set_token(None);
                let envelope = result?;
                if !envelope.is_success() {
                    return Err(ClientError::Api {
                        code: envelope.code,
                        message: envelope.message,
                    });
                }
                Ok(())
            },
            |unit| unit,
        )
    }

    /// Fetch the current account
    pub fn me(&self) -> OutcomeStream<Account> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move {
                http.get_data::<CurrentAccountResponse>("api/auth/me").await
            },
            |resp| resp.account,
        )
    }

    /// Update profile fields
    pub fn update_profile(&self, update: AccountUpdate) -> OutcomeStream<Account> {
        let http = Arc::clone(&self.http);
        server_flow(
            move || async move { http.put_data::<Account, _>("api/account", &update).await },
            |account| account,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use async_trait::async_trait;
    use futures::StreamExt;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use shared::{ApiResponse, ServerErrorKind};

    use super::*;
    use crate::error::ClientResult;
    use crate::flow::Outcome;

    /// Serves the same canned response body for every request
    struct CannedClient {
        body: Value,
        token: RwLock<Option<String>>,
    }

    impl CannedClient {
        fn new(body: Value, token: Option<&str>) -> Self {
            Self {
                body,
                token: RwLock::new(token.map(str::to_string)),
            }
        }

        fn decode<T: DeserializeOwned>(&self) -> ClientResult<T> {
            Ok(serde_json::from_value(self.body.clone())?)
        }
    }

    #[async_trait]
    impl HttpClient for CannedClient {
        async fn get<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            self.decode()
        }

        async fn post<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            self.decode()
        }

        async fn post_empty<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            self.decode()
        }

        async fn put<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            _path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            self.decode()
        }

        async fn delete<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
            self.decode()
        }

        fn set_token(&self, token: Option<String>) {
            *self.token.write().unwrap() = token;
        }

        fn token(&self) -> Option<String> {
            self.token.read().unwrap().clone()
        }
    }

    fn envelope(resp: ApiResponse<()>) -> Value {
        serde_json::to_value(resp).unwrap()
    }

    #[tokio::test]
    async fn logout_success_clears_token() {
        let http = Arc::new(CannedClient::new(envelope(ApiResponse::ok(())), Some("tok")));
        let repo = AccountRepository::new(Arc::clone(&http));

        let emissions: Vec<_> = repo.logout().collect().await;
        assert_eq!(emissions.len(), 2);
        assert!(matches!(emissions[1], Outcome::Success(())));
        assert!(http.token().is_none());
    }

    #[tokio::test]
    async fn logout_rejects_error_envelope_and_still_clears_token() {
        // A 200 response whose envelope carries an error code is a failure.
        let http = Arc::new(CannedClient::new(
            envelope(ApiResponse::error("E1003", "Token expired")),
            Some("tok"),
        ));
        let repo = AccountRepository::new(Arc::clone(&http));

        let emissions: Vec<_> = repo.logout().collect().await;
        assert_eq!(emissions.len(), 2);
        match &emissions[1] {
            Outcome::ServerError(err) => assert_eq!(err.kind, ServerErrorKind::Token),
            other => panic!("expected ServerError, got {:?}", other),
        }
        assert!(http.token().is_none());
    }
}
