//! REST API wire types for the Harbor chat backend.
//!
//! All request/response bodies are JSON with camelCase field names; the
//! structs here are the single source of truth for that shape. Entities are
//! plain values: each fetch replaces the previous copy wholesale.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

// ── Entities ─────────────────────────────────────────────────────────────────

/// A registered account, as embedded in channels and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
}

/// A named message container with a membership set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: User,
    #[serde(default)]
    pub members: Vec<User>,
}

/// Content kind tag carried by every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Text,
    Image,
    File,
    System,
}

/// A message posted to exactly one channel by exactly one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sender: User,
    pub channel: Channel,
    pub message_type: MessageType,
}

// ── Auth payloads ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response from `/api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ── Channel payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_private: bool,
}

// ── Message payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub content: String,
    pub channel_id: i64,
}

/// Body for message edits. The server ignores `channel_id` on update; it is
/// sent as 0 to satisfy the shared request shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    pub content: String,
    pub channel_id: i64,
}

impl UpdateMessageRequest {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            channel_id: 0,
        }
    }
}

/// One page of the paginated message listing. The total counts are whatever
/// the server reported; nothing is recomputed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePage {
    pub content: Vec<Message>,
    pub total_elements: i64,
    pub total_pages: i64,
}

// ── Error shape ──────────────────────────────────────────────────────────────

/// Failure payload the server attaches to non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_user_json() -> serde_json::Value {
        serde_json::json!({
            "id": 7,
            "username": "testuser",
            "email": "test@example.com",
        })
    }

    #[test]
    fn user_optional_fields_default() {
        let user: User = serde_json::from_value(sample_user_json()).unwrap();
        assert_eq!(user.username, "testuser");
        assert!(user.display_name.is_none());
        assert!(user.is_online.is_none());
    }

    #[test]
    fn channel_round_trips_camel_case() {
        let channel: Channel = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "general",
            "isPrivate": false,
            "createdAt": "2026-02-11T09:30:00Z",
            "createdBy": sample_user_json(),
            "members": [sample_user_json()],
        }))
        .unwrap();
        assert!(!channel.is_private);
        assert_eq!(channel.members.len(), 1);

        let value = serde_json::to_value(&channel).unwrap();
        assert!(value.get("isPrivate").is_some());
        assert!(value.get("is_private").is_none());
    }

    #[test]
    fn message_type_uses_upper_case_tags() {
        assert_eq!(
            serde_json::to_value(MessageType::Text).unwrap(),
            serde_json::json!("TEXT")
        );
        let parsed: MessageType = serde_json::from_value(serde_json::json!("SYSTEM")).unwrap();
        assert_eq!(parsed, MessageType::System);
    }

    #[test]
    fn login_response_reads_access_token() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "accessToken": "mock-jwt-token",
            "tokenType": "Bearer",
            "id": 1,
            "username": "testuser",
            "email": "test@example.com",
        }))
        .unwrap();
        assert_eq!(response.access_token, "mock-jwt-token");
        assert_eq!(response.token_type, "Bearer");
    }

    #[test]
    fn update_request_pins_channel_id_to_zero() {
        let body = UpdateMessageRequest::new("edited");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value.get("channelId"), Some(&serde_json::json!(0)));
    }
}
