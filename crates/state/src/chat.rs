//! Message thread view model for one selected channel.

use harbor_protocol::{CreateMessageRequest, Message};

/// State behind the message pane.
///
/// In-flight loads are never cancelled when the user switches channels;
/// instead every load transition carries the channel id it was issued for,
/// and a late response for a stale channel is simply discarded.
#[derive(Debug, Clone)]
pub struct ChatView {
    pub channel_id: i64,
    /// Oldest-first display order.
    pub messages: Vec<Message>,
    pub draft: String,
    pub loading: bool,
    /// One outstanding send at a time.
    pub sending: bool,
    pub error: Option<String>,
    pub scroll_offset: usize,
}

impl ChatView {
    #[must_use]
    pub fn new(channel_id: i64) -> Self {
        Self {
            channel_id,
            messages: Vec::new(),
            draft: String::new(),
            loading: true,
            sending: false,
            error: None,
            scroll_offset: 0,
        }
    }

    /// A message list arrived, newest first from the server; reversed here
    /// for display. Ignored when it belongs to a previously selected channel.
    pub fn loaded(&mut self, channel_id: i64, mut messages: Vec<Message>) {
        if channel_id != self.channel_id {
            return;
        }
        messages.reverse();
        self.messages = messages;
        self.loading = false;
        self.error = None;
        self.scroll_offset = 0;
    }

    pub fn load_failed(&mut self, channel_id: i64) {
        if channel_id != self.channel_id {
            return;
        }
        self.loading = false;
        self.error = Some("Failed to load messages".into());
    }

    /// Gate and build the send request.
    ///
    /// `None` when the draft is blank or a send is already in flight; the
    /// second case suppresses the attempt entirely until the first resolves.
    pub fn begin_send(&mut self) -> Option<CreateMessageRequest> {
        if self.sending {
            return None;
        }
        let content = self.draft.trim();
        if content.is_empty() {
            return None;
        }
        self.sending = true;
        Some(CreateMessageRequest {
            content: content.to_owned(),
            channel_id: self.channel_id,
        })
    }

    pub fn send_succeeded(&mut self, message: Message) {
        self.sending = false;
        self.draft.clear();
        self.error = None;
        self.messages.push(message);
        self.scroll_offset = 0;
    }

    /// Send failed; the draft stays in the input for another attempt.
    pub fn send_failed(&mut self) {
        self.sending = false;
        self.error = Some("Failed to send message".into());
    }

    /// An edit came back; the stored copy is replaced wholesale.
    pub fn message_updated(&mut self, updated: Message) {
        if let Some(slot) = self.messages.iter_mut().find(|m| m.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn message_deleted(&mut self, message_id: i64) {
        self.messages.retain(|m| m.id != message_id);
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {
        super::*,
        chrono::{TimeZone, Utc},
        harbor_protocol::{Channel, MessageType, User},
    };

    fn sample_user() -> User {
        User {
            id: 1,
            username: "testuser".into(),
            email: "test@example.com".into(),
            display_name: None,
            bio: None,
            is_online: None,
            last_active: None,
        }
    }

    fn message(id: i64, content: &str) -> Message {
        message_in_channel(id, 3, content)
    }

    fn message_in_channel(id: i64, channel_id: i64, content: &str) -> Message {
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        Message {
            id,
            content: content.into(),
            created_at: instant,
            updated_at: instant,
            sender: sample_user(),
            channel: Channel {
                id: channel_id,
                name: "general".into(),
                description: None,
                is_private: false,
                created_at: instant,
                created_by: sample_user(),
                members: Vec::new(),
            },
            message_type: MessageType::Text,
        }
    }

    #[test]
    fn load_reverses_to_oldest_first() {
        let mut view = ChatView::new(3);
        view.loaded(3, vec![message(2, "second"), message(1, "first")]);

        assert!(!view.loading);
        let ids: Vec<i64> = view.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn stale_channel_load_is_discarded() {
        let mut view = ChatView::new(3);
        // Response for channel 7 arrives after the user moved to channel 3.
        view.loaded(7, vec![message(1, "old news")]);
        assert!(view.loading);
        assert!(view.messages.is_empty());

        view.load_failed(7);
        assert!(view.error.is_none());
    }

    #[test]
    fn second_send_suppressed_while_first_in_flight() {
        let mut view = ChatView::new(3);
        view.draft = "hello".into();

        let first = view.begin_send();
        assert!(first.is_some());
        assert!(view.sending);

        view.draft = "hello again".into();
        assert!(view.begin_send().is_none());

        view.send_succeeded(message(1, "hello"));
        assert!(!view.sending);
        assert!(view.draft.is_empty());
        assert_eq!(view.messages.len(), 1);
    }

    #[test]
    fn blank_draft_never_sends() {
        let mut view = ChatView::new(3);
        view.draft = "   ".into();
        assert!(view.begin_send().is_none());
        assert!(!view.sending);
    }

    #[test]
    fn send_failure_preserves_draft() {
        let mut view = ChatView::new(3);
        view.draft = "hello".into();
        view.begin_send();
        view.send_failed();

        assert_eq!(view.draft, "hello");
        assert_eq!(view.error.as_deref(), Some("Failed to send message"));
        assert!(!view.sending);
    }

    #[test]
    fn send_resolving_after_channel_switch_appends_to_active_view() {
        // Only loads carry a channel-id guard; send completions do not.
        let mut view = ChatView::new(7);
        view.loaded(7, Vec::new());

        view.draft = "hello".into();
        view.begin_send();
        view.send_succeeded(message_in_channel(1, 3, "hello"));

        assert_eq!(view.messages.len(), 1);
        assert!(!view.sending);
        assert!(view.draft.is_empty());
    }

    #[test]
    fn edit_and_delete_apply_by_id() {
        let mut view = ChatView::new(3);
        view.loaded(3, vec![message(2, "second"), message(1, "first")]);

        view.message_updated(message(1, "first, edited"));
        assert_eq!(view.messages[0].content, "first, edited");

        view.message_deleted(2);
        assert_eq!(view.messages.len(), 1);
    }
}
