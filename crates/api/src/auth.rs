//! Sign-in, sign-up, sign-out, and current-user lookups.

use {
    crate::{
        Session,
        error::{Error, Result, endpoint, expect_success, into_result},
    },
    harbor_protocol::{LoginRequest, LoginResponse, RegisterRequest, User},
    tracing::debug,
};

/// Exchange credentials for a bearer token and profile summary.
pub async fn sign_in(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<LoginResponse> {
    let response = client
        .post(endpoint(base_url, "/api/auth/signin"))
        .json(&LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        })
        .send()
        .await?;
    into_result(response).await
}

/// Register a new account. The server replies with a confirmation body that
/// carries no entity state, so success is reported as `()`.
pub async fn sign_up(
    client: &reqwest::Client,
    base_url: &str,
    request: &RegisterRequest,
) -> Result<()> {
    let response = client
        .post(endpoint(base_url, "/api/auth/signup"))
        .json(request)
        .send()
        .await?;
    expect_success(response).await
}

/// Best-effort sign-out notification.
///
/// With no token held, no request is made at all. A remote failure is logged
/// and swallowed: sign-out always succeeds locally. Clearing the [`Session`]
/// itself is the caller's move, after this returns.
pub async fn sign_out(client: &reqwest::Client, base_url: &str, session: &Session) {
    if !session.is_authenticated() {
        return;
    }
    let result = client
        .post(endpoint(base_url, "/api/auth/signout"))
        .headers(session.auth_header())
        .send()
        .await;
    match result {
        Ok(response) if !response.status().is_success() => {
            debug!(status = response.status().as_u16(), "sign-out rejected by server");
        },
        Err(error) => {
            debug!(%error, "sign-out notification failed");
        },
        Ok(_) => {},
    }
}

/// Fetch the profile behind the held token.
///
/// Short-circuits with [`Error::MissingCredential`] before any request when
/// the session is anonymous.
pub async fn current_user(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
) -> Result<User> {
    if !session.is_authenticated() {
        return Err(Error::MissingCredential);
    }
    let response = client
        .get(endpoint(base_url, "/api/user/me"))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_returns_token_and_profile() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/signin")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "testuser",
                "password": "password123",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "accessToken": "mock-jwt-token",
                    "tokenType": "Bearer",
                    "id": 1,
                    "username": "testuser",
                    "email": "test@example.com",
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = sign_in(&client, &server.url(), "testuser", "password123")
            .await
            .unwrap();

        assert_eq!(response.access_token, "mock-jwt-token");
        assert_eq!(response.username, "testuser");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sign_in_failure_surfaces_server_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/auth/signin")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid username or password"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let error = sign_in(&client, &server.url(), "testuser", "wrongpassword")
            .await
            .unwrap_err();

        match error {
            Error::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid username or password");
            },
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sign_out_without_token_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/signout")
            .expect(0)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        sign_out(&client, &server.url(), &Session::anonymous()).await;
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sign_out_swallows_remote_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/signout")
            .match_header("authorization", "Bearer mock-jwt-token")
            .with_status(500)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        // Must return despite the 500; sign-out always succeeds locally.
        sign_out(&client, &server.url(), &Session::from_token("mock-jwt-token")).await;
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn current_user_requires_credential() {
        let client = reqwest::Client::new();
        let error = current_user(&client, "http://127.0.0.1:1", &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(error, Error::MissingCredential));
    }

    #[tokio::test]
    async fn current_user_fetches_profile() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/user/me")
            .match_header("authorization", "Bearer mock-jwt-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": 1,
                    "username": "testuser",
                    "email": "test@example.com",
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let user = current_user(&client, &server.url(), &Session::from_token("mock-jwt-token"))
            .await
            .unwrap();
        assert_eq!(user.username, "testuser");
        mock.assert_async().await;
    }
}
