//! Channel collection calls: list, fetch, create, join, leave.

use {
    crate::{
        Session,
        error::{Result, endpoint, into_result},
    },
    harbor_protocol::{Channel, CreateChannelRequest},
};

/// All channels visible to the caller.
pub async fn list_all(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
) -> Result<Vec<Channel>> {
    let response = client
        .get(endpoint(base_url, "/api/channels"))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

/// Channels the caller is a member of.
pub async fn list_mine(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
) -> Result<Vec<Channel>> {
    let response = client
        .get(endpoint(base_url, "/api/channels/my"))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

pub async fn get(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    channel_id: i64,
) -> Result<Channel> {
    let response = client
        .get(endpoint(base_url, &format!("/api/channels/{channel_id}")))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

/// Create a channel. Name validation happens in the view-model layer before
/// this is ever called; the server still enforces its own rules (duplicate
/// names and the like) and those failures surface as `Error::Api`.
pub async fn create(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    request: &CreateChannelRequest,
) -> Result<Channel> {
    let response = client
        .post(endpoint(base_url, "/api/channels"))
        .headers(session.auth_header())
        .json(request)
        .send()
        .await?;
    into_result(response).await
}

/// Join a channel; the response is the channel with its updated member set.
pub async fn join(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    channel_id: i64,
) -> Result<Channel> {
    let response = client
        .post(endpoint(base_url, &format!("/api/channels/{channel_id}/join")))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

/// Leave a channel; the response is the channel with its updated member set.
pub async fn leave(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    channel_id: i64,
) -> Result<Channel> {
    let response = client
        .post(endpoint(base_url, &format!("/api/channels/{channel_id}/leave")))
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn channel_json(id: i64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "isPrivate": false,
            "createdAt": "2026-02-11T09:30:00Z",
            "createdBy": {
                "id": 1,
                "username": "testuser",
                "email": "test@example.com",
            },
            "members": [],
        })
    }

    #[tokio::test]
    async fn list_all_attaches_auth_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/channels")
            .match_header("authorization", "Bearer mock-jwt-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([channel_json(1, "general"), channel_json(2, "random")])
                    .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let channels = list_all(&client, &server.url(), &session).await.unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "general");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_posts_request_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/channels")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "design",
                "description": "Design talk",
                "isPrivate": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(channel_json(9, "design").to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let request = CreateChannelRequest {
            name: "design".into(),
            description: Some("Design talk".into()),
            is_private: false,
        };
        let channel = create(&client, &server.url(), &session, &request)
            .await
            .unwrap();

        assert_eq!(channel.id, 9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn duplicate_name_failure_propagates_unmodified() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/channels")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Channel name already exists"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let request = CreateChannelRequest {
            name: "general".into(),
            description: None,
            is_private: false,
        };
        let error = create(&client, &server.url(), &session, &request)
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Channel name already exists");
    }

    #[tokio::test]
    async fn join_hits_channel_scoped_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/channels/4/join")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(channel_json(4, "random").to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let channel = join(&client, &server.url(), &session, 4).await.unwrap();

        assert_eq!(channel.id, 4);
        mock.assert_async().await;
    }
}
