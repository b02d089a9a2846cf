//! Message collection calls: list (plain and paginated), send, edit, delete.

use {
    crate::{
        Session,
        error::{Result, endpoint, expect_success, into_result},
    },
    harbor_protocol::{CreateMessageRequest, Message, MessagePage, UpdateMessageRequest},
};

/// Most recent messages in a channel, newest first, capped at `limit`.
pub async fn list_by_channel(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    channel_id: i64,
    limit: u32,
) -> Result<Vec<Message>> {
    let response = client
        .get(endpoint(base_url, &format!("/api/messages/channel/{channel_id}")))
        .query(&[("limit", limit)])
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

/// One page of a channel's messages. The page/total counts are relayed from
/// the server exactly as supplied; nothing is recomputed here.
pub async fn list_paginated(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    channel_id: i64,
    page: u32,
    size: u32,
) -> Result<MessagePage> {
    let response = client
        .get(endpoint(
            base_url,
            &format!("/api/messages/channel/{channel_id}/paginated"),
        ))
        .query(&[("page", page), ("size", size)])
        .headers(session.auth_header())
        .send()
        .await?;
    into_result(response).await
}

/// Post a new message to a channel.
pub async fn create(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    request: &CreateMessageRequest,
) -> Result<Message> {
    let response = client
        .post(endpoint(base_url, "/api/messages"))
        .headers(session.auth_header())
        .json(request)
        .send()
        .await?;
    into_result(response).await
}

/// Replace a message's content. Only the body text can change.
pub async fn update(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    message_id: i64,
    content: &str,
) -> Result<Message> {
    let response = client
        .put(endpoint(base_url, &format!("/api/messages/{message_id}")))
        .headers(session.auth_header())
        .json(&UpdateMessageRequest::new(content))
        .send()
        .await?;
    into_result(response).await
}

pub async fn delete(
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    message_id: i64,
) -> Result<()> {
    let response = client
        .delete(endpoint(base_url, &format!("/api/messages/{message_id}")))
        .headers(session.auth_header())
        .send()
        .await?;
    expect_success(response).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn message_json(id: i64, content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "content": content,
            "createdAt": "2026-02-11T09:30:00Z",
            "updatedAt": "2026-02-11T09:30:00Z",
            "sender": {
                "id": 1,
                "username": "testuser",
                "email": "test@example.com",
            },
            "channel": {
                "id": 3,
                "name": "general",
                "isPrivate": false,
                "createdAt": "2026-02-01T00:00:00Z",
                "createdBy": {
                    "id": 1,
                    "username": "testuser",
                    "email": "test@example.com",
                },
                "members": [],
            },
            "messageType": "TEXT",
        })
    }

    #[tokio::test]
    async fn list_passes_limit_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/messages/channel/3")
            .match_query(mockito::Matcher::UrlEncoded("limit".into(), "50".into()))
            .match_header("authorization", "Bearer mock-jwt-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!([message_json(11, "hello")]).to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let messages = list_by_channel(&client, &server.url(), &session, 3, 50)
            .await
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn paginated_counts_pass_through_untouched() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/messages/channel/3/paginated")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "2".into()),
                mockito::Matcher::UrlEncoded("size".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "content": [message_json(11, "hello")],
                    // Deliberately inconsistent with content length: the
                    // client must relay whatever the server said.
                    "totalElements": 999,
                    "totalPages": 50,
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let page = list_paginated(&client, &server.url(), &session, 3, 2, 20)
            .await
            .unwrap();

        assert_eq!(page.total_elements, 999);
        assert_eq!(page.total_pages, 50);
        assert_eq!(page.content.len(), 1);
    }

    #[tokio::test]
    async fn update_sends_content_only_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/messages/11")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "content": "edited",
                "channelId": 0,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(message_json(11, "edited").to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        let message = update(&client, &server.url(), &session, 11, "edited")
            .await
            .unwrap();

        assert_eq!(message.content, "edited");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_reports_bare_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/messages/11")
            .with_status(204)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let session = Session::from_token("mock-jwt-token");
        delete(&client, &server.url(), &session, 11).await.unwrap();
        mock.assert_async().await;
    }
}
