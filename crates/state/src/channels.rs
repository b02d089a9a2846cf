//! Channel directory view model: joined list, public browser, create dialog.

use {
    crate::membership,
    harbor_protocol::{Channel, CreateChannelRequest},
};

/// State behind the channel sidebar.
///
/// The joined and global lists load in parallel and settle independently;
/// each transition touches only its own slice.
#[derive(Debug, Clone, Default)]
pub struct ChannelDirectory {
    pub my_channels: Vec<Channel>,
    pub public_channels: Vec<Channel>,
    pub loading_mine: bool,
    pub loading_all: bool,
    pub error: Option<String>,
    pub selected_id: Option<i64>,
}

impl ChannelDirectory {
    pub fn load_started(&mut self) {
        self.loading_mine = true;
        self.loading_all = true;
        self.error = None;
    }

    pub fn mine_loaded(&mut self, channels: Vec<Channel>) {
        self.my_channels = channels;
        self.loading_mine = false;
        if self.selected_id.is_none() {
            self.selected_id = self.my_channels.first().map(|c| c.id);
        }
    }

    pub fn all_loaded(&mut self, channels: Vec<Channel>) {
        self.public_channels = channels;
        self.loading_all = false;
    }

    pub fn mine_failed(&mut self) {
        self.loading_mine = false;
        self.error = Some("Failed to load channels".into());
    }

    pub fn all_failed(&mut self) {
        self.loading_all = false;
        self.error = Some("Failed to load channels".into());
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading_mine || self.loading_all
    }

    /// Channels offered in the "Browse" section: public minus joined.
    #[must_use]
    pub fn browse(&self) -> Vec<Channel> {
        membership::joinable(&self.my_channels, &self.public_channels)
    }

    /// A join completed; the channel moves out of the browse section on the
    /// next [`browse`](Self::browse) call, with no re-fetch.
    pub fn joined(&mut self, channel: Channel) {
        let id = channel.id;
        if !membership::is_joined(&self.my_channels, id) {
            self.my_channels.push(channel);
        }
        self.selected_id = Some(id);
    }

    pub fn created(&mut self, channel: Channel) {
        let id = channel.id;
        self.my_channels.push(channel);
        self.selected_id = Some(id);
    }

    pub fn left(&mut self, channel_id: i64) {
        self.my_channels.retain(|c| c.id != channel_id);
        if self.selected_id == Some(channel_id) {
            self.selected_id = self.my_channels.first().map(|c| c.id);
        }
    }

    pub fn select(&mut self, channel_id: i64) {
        self.selected_id = Some(channel_id);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Channel> {
        self.selected_id
            .and_then(|id| self.my_channels.iter().find(|c| c.id == id))
    }
}

/// Create-channel dialog state.
#[derive(Debug, Clone, Default)]
pub struct CreateChannelForm {
    pub name: String,
    pub description: String,
    pub error: Option<String>,
}

impl CreateChannelForm {
    /// Validate locally; `None` means no request is sent.
    pub fn submit(&mut self) -> Option<CreateChannelRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some("Channel name is required".into());
            return None;
        }
        self.error = None;
        let description = self.description.trim();
        Some(CreateChannelRequest {
            name: name.to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
            is_private: false,
        })
    }

    /// Remote create failed; dialog stays populated with the last input.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {
        super::*,
        chrono::{TimeZone, Utc},
        harbor_protocol::User,
    };

    fn channel(id: i64, name: &str) -> Channel {
        Channel {
            id,
            name: name.into(),
            description: None,
            is_private: false,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            created_by: User {
                id: 1,
                username: "testuser".into(),
                email: "test@example.com".into(),
                display_name: None,
                bio: None,
                is_online: None,
                last_active: None,
            },
            members: Vec::new(),
        }
    }

    #[test]
    fn slices_settle_independently() {
        let mut directory = ChannelDirectory::default();
        directory.load_started();
        assert!(directory.is_loading());

        directory.mine_loaded(vec![channel(1, "general")]);
        assert!(directory.is_loading()); // global list still pending
        assert_eq!(directory.selected_id, Some(1));

        directory.all_loaded(vec![channel(1, "general"), channel(2, "random")]);
        assert!(!directory.is_loading());

        let browse: Vec<i64> = directory.browse().iter().map(|c| c.id).collect();
        assert_eq!(browse, vec![2]);
    }

    #[test]
    fn failed_slice_reports_error_without_blocking_other() {
        let mut directory = ChannelDirectory::default();
        directory.load_started();
        directory.mine_failed();
        directory.all_loaded(vec![channel(2, "random")]);

        assert_eq!(directory.error.as_deref(), Some("Failed to load channels"));
        assert_eq!(directory.public_channels.len(), 1);
        assert!(!directory.is_loading());
    }

    #[test]
    fn join_moves_channel_out_of_browse() {
        let mut directory = ChannelDirectory::default();
        directory.mine_loaded(vec![channel(1, "general")]);
        directory.all_loaded(vec![channel(1, "general"), channel(2, "random")]);

        directory.joined(channel(2, "random"));
        assert!(directory.browse().is_empty());
        assert_eq!(directory.selected_id, Some(2));

        // Joining twice does not duplicate the membership entry.
        directory.joined(channel(2, "random"));
        assert_eq!(directory.my_channels.len(), 2);
    }

    #[test]
    fn leave_reselects_first_remaining_channel() {
        let mut directory = ChannelDirectory::default();
        directory.mine_loaded(vec![channel(1, "general"), channel(2, "random")]);
        directory.select(2);
        directory.left(2);
        assert_eq!(directory.selected_id, Some(1));
    }

    #[test]
    fn empty_name_is_rejected_before_any_request() {
        let mut form = CreateChannelForm {
            name: "   ".into(),
            ..CreateChannelForm::default()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Channel name is required"));
    }

    #[test]
    fn submit_trims_and_drops_empty_description() {
        let mut form = CreateChannelForm {
            name: "  design  ".into(),
            description: "  ".into(),
            ..CreateChannelForm::default()
        };
        let request = form.submit().unwrap();
        assert_eq!(request.name, "design");
        assert!(request.description.is_none());
        assert!(!request.is_private);
    }
}
