//! Screen composition over the harbor-state view models.

use harbor_protocol::Channel;
use harbor_state::{ChannelDirectory, ChatView, CreateChannelForm, LoginForm, RegisterForm};

/// Input modes for the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation: moving the channel cursor, scrolling, quitting.
    Normal,
    /// Typing into the message input.
    Insert,
}

/// Which panel has focus on the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Channels,
    Messages,
}

/// Which auth form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Sign-in / sign-up screen.
#[derive(Debug, Clone)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub login: LoginForm,
    pub register: RegisterForm,
    /// One-line confirmation, e.g. after a successful registration.
    pub notice: Option<String>,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            notice: None,
        }
    }
}

impl AuthScreen {
    /// Flip between the sign-in and sign-up forms.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }
}

/// One row of the channel sidebar.
#[derive(Debug, Clone)]
pub enum SidebarEntry {
    Joined(Channel),
    Joinable(Channel),
}

impl SidebarEntry {
    #[must_use]
    pub fn channel(&self) -> &Channel {
        match self {
            Self::Joined(channel) | Self::Joinable(channel) => channel,
        }
    }
}

/// Channel list + message thread screen.
#[derive(Debug, Clone)]
pub struct ChatScreen {
    pub directory: ChannelDirectory,
    pub chat: Option<ChatView>,
    pub create_form: Option<CreateChannelForm>,
    pub focus: Panel,
    pub input_mode: InputMode,
    /// Cursor position over the combined sidebar rows.
    pub cursor: usize,
    /// Whether the create dialog focus is on the description field.
    pub create_focus_desc: bool,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self {
            directory: ChannelDirectory::default(),
            chat: None,
            create_form: None,
            focus: Panel::Channels,
            input_mode: InputMode::Normal,
            cursor: 0,
            create_focus_desc: false,
        }
    }
}

impl ChatScreen {
    /// The sidebar rows: joined channels first, then the joinable remainder
    /// from the membership reconciler.
    #[must_use]
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        let mut entries: Vec<SidebarEntry> = self
            .directory
            .my_channels
            .iter()
            .cloned()
            .map(SidebarEntry::Joined)
            .collect();
        entries.extend(self.directory.browse().into_iter().map(SidebarEntry::Joinable));
        entries
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.sidebar_entries().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// The sidebar row under the cursor, if any.
    #[must_use]
    pub fn entry_under_cursor(&self) -> Option<SidebarEntry> {
        self.sidebar_entries().get(self.cursor).cloned()
    }
}
