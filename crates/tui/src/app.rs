use {
    crate::{
        Error,
        screen::{AuthMode, AuthScreen, ChatScreen, InputMode, Panel, SidebarEntry},
        ui::{self, theme::Theme},
    },
    crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers},
    futures::StreamExt,
    harbor_api::Session,
    harbor_protocol::{Channel, CreateChannelRequest, CreateMessageRequest, Message, RegisterRequest, User},
    harbor_state::ChatView,
    ratatui::DefaultTerminal,
    std::time::Duration,
    tokio::sync::mpsc,
    tracing::debug,
    tui_textarea::TextArea,
};

/// Events that drive the application loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press.
    Key(KeyEvent),
    /// Terminal resize or focus-regained — forces a full redraw.
    Redraw,
    /// Periodic tick for pending-state redraws.
    Tick,
    /// A background API call settled.
    Api(ApiEvent),
}

/// Completion of one outbound API call. Each carries only its own slice of
/// state; independent loads settle in whatever order the network decides.
#[derive(Debug)]
pub enum ApiEvent {
    SignedIn(Result<Session, String>),
    Registered(Result<(), String>),
    MyChannels(Result<Vec<Channel>, String>),
    AllChannels(Result<Vec<Channel>, String>),
    Messages {
        channel_id: i64,
        result: Result<Vec<Message>, String>,
    },
    MessageSent(Result<Message, String>),
    ChannelCreated(Result<Channel, String>),
    ChannelJoined(Result<Channel, String>),
    ChannelLeft(Result<Channel, String>),
    SignedOut,
}

/// Which screen is on display.
#[derive(Debug)]
pub enum Screen {
    Auth(AuthScreen),
    Chat(ChatScreen),
}

/// Messages requested per channel load.
const MESSAGE_FETCH_LIMIT: u32 = 50;

/// Top-level application.
pub struct App {
    client: reqwest::Client,
    base_url: String,
    session: Session,
    screen: Screen,
    theme: Theme,
    should_quit: bool,
    dirty: bool,
}

impl App {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            session: Session::anonymous(),
            screen: Screen::Auth(AuthScreen::default()),
            theme: Theme::default(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Main event loop: reads terminal events, dispatches, and re-renders.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<(), Error> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

        // Terminal event reader
        let term_tx = event_tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(Ok(event)) = reader.next().await {
                let app_event = match event {
                    Event::Key(key) => AppEvent::Key(key),
                    Event::Resize(..) | Event::FocusGained => AppEvent::Redraw,
                    _ => continue,
                };
                if term_tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        // Tick timer, used to repaint pending-state hints
        let tick_tx = event_tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(250));
            loop {
                interval.tick().await;
                if tick_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        let mut textarea = message_input();

        while !self.should_quit {
            if self.dirty {
                terminal.draw(|frame| {
                    ui::draw(frame, &self.screen, &self.session, &mut textarea, &self.theme);
                })?;
                self.dirty = false;
            }

            if let Some(event) = event_rx.recv().await {
                self.handle_event(event, &event_tx, &mut textarea);
            }
        }

        Ok(())
    }

    fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::UnboundedSender<AppEvent>,
        textarea: &mut TextArea<'static>,
    ) {
        match event {
            AppEvent::Key(key) => self.handle_key(key, tx, textarea),
            AppEvent::Redraw => {
                self.dirty = true;
            },
            AppEvent::Tick => {
                if self.has_pending_work() {
                    self.dirty = true;
                }
            },
            AppEvent::Api(api_event) => self.handle_api_event(api_event, tx, textarea),
        }
    }

    fn has_pending_work(&self) -> bool {
        match &self.screen {
            Screen::Auth(auth) => auth.login.submitting || auth.register.submitting,
            Screen::Chat(chat) => {
                chat.directory.is_loading()
                    || chat
                        .chat
                        .as_ref()
                        .is_some_and(|view| view.loading || view.sending)
            },
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::UnboundedSender<AppEvent>,
        textarea: &mut TextArea<'static>,
    ) {
        // Ctrl+C quits from anywhere.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.dirty = true;
        match &mut self.screen {
            Screen::Auth(auth) => {
                handle_auth_key(auth, key, &self.client, &self.base_url, tx);
                if matches!(key.code, KeyCode::Esc) {
                    self.should_quit = true;
                }
            },
            Screen::Chat(chat) => {
                // Ctrl+L signs out: notify the server best-effort and drop the
                // local credential immediately; the screen never waits.
                if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    spawn_sign_out(
                        self.client.clone(),
                        self.base_url.clone(),
                        self.session.clone(),
                        tx.clone(),
                    );
                    self.session.clear();
                    self.screen = Screen::Auth(AuthScreen::default());
                    *textarea = message_input();
                    return;
                }
                handle_chat_key(
                    chat,
                    key,
                    &self.client,
                    &self.base_url,
                    &self.session,
                    tx,
                    textarea,
                );
                if chat.input_mode == InputMode::Normal
                    && chat.create_form.is_none()
                    && key.code == KeyCode::Char('q')
                {
                    self.should_quit = true;
                }
            },
        }
    }

    fn handle_api_event(
        &mut self,
        event: ApiEvent,
        tx: &mpsc::UnboundedSender<AppEvent>,
        textarea: &mut TextArea<'static>,
    ) {
        self.dirty = true;
        match event {
            ApiEvent::SignedIn(Ok(session)) => {
                self.session = session;
                let mut chat = ChatScreen::default();
                chat.directory.load_started();
                spawn_channel_loads(
                    self.client.clone(),
                    self.base_url.clone(),
                    self.session.clone(),
                    tx.clone(),
                );
                self.screen = Screen::Chat(chat);
            },
            ApiEvent::SignedIn(Err(message)) => {
                if let Screen::Auth(auth) = &mut self.screen {
                    auth.login.failed(message);
                }
            },
            ApiEvent::Registered(Ok(())) => {
                if let Screen::Auth(auth) = &mut self.screen {
                    auth.register.succeeded();
                    auth.mode = AuthMode::SignIn;
                    auth.notice = Some("Account created. Sign in to continue.".into());
                }
            },
            ApiEvent::Registered(Err(message)) => {
                if let Screen::Auth(auth) = &mut self.screen {
                    auth.register.failed(message);
                }
            },
            ApiEvent::MyChannels(result) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    match result {
                        Ok(channels) => {
                            chat.directory.mine_loaded(channels);
                            if chat.chat.is_none()
                                && let Some(id) = chat.directory.selected_id
                            {
                                open_channel(
                                    chat,
                                    id,
                                    &self.client,
                                    &self.base_url,
                                    &self.session,
                                    tx,
                                );
                            }
                        },
                        Err(error) => {
                            debug!(%error, "joined-channel load failed");
                            chat.directory.mine_failed();
                        },
                    }
                }
            },
            ApiEvent::AllChannels(result) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    match result {
                        Ok(channels) => chat.directory.all_loaded(channels),
                        Err(error) => {
                            debug!(%error, "channel-list load failed");
                            chat.directory.all_failed();
                        },
                    }
                }
            },
            ApiEvent::Messages { channel_id, result } => {
                if let Screen::Chat(chat) = &mut self.screen
                    && let Some(view) = &mut chat.chat
                {
                    match result {
                        Ok(messages) => view.loaded(channel_id, messages),
                        Err(error) => {
                            debug!(%error, channel_id, "message load failed");
                            view.load_failed(channel_id);
                        },
                    }
                }
            },
            ApiEvent::MessageSent(result) => {
                if let Screen::Chat(chat) = &mut self.screen
                    && let Some(view) = &mut chat.chat
                {
                    match result {
                        Ok(message) => {
                            view.send_succeeded(message);
                            *textarea = message_input();
                        },
                        Err(error) => {
                            debug!(%error, "send failed");
                            view.send_failed();
                        },
                    }
                }
            },
            ApiEvent::ChannelCreated(result) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    match result {
                        Ok(channel) => {
                            chat.create_form = None;
                            let id = channel.id;
                            chat.directory.created(channel);
                            open_channel(chat, id, &self.client, &self.base_url, &self.session, tx);
                        },
                        Err(message) => {
                            if let Some(form) = &mut chat.create_form {
                                form.failed(message);
                            }
                        },
                    }
                }
            },
            ApiEvent::ChannelJoined(result) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    match result {
                        Ok(channel) => {
                            let id = channel.id;
                            chat.directory.joined(channel);
                            open_channel(chat, id, &self.client, &self.base_url, &self.session, tx);
                        },
                        Err(error) => {
                            debug!(%error, "join failed");
                            chat.directory.error = Some("Failed to join channel".into());
                        },
                    }
                }
            },
            ApiEvent::ChannelLeft(result) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    match result {
                        Ok(channel) => chat.directory.left(channel.id),
                        Err(error) => {
                            debug!(%error, "leave failed");
                            chat.directory.error = Some("Failed to leave channel".into());
                        },
                    }
                }
            },
            ApiEvent::SignedOut => {
                debug!("sign-out notification settled");
            },
        }
    }
}

/// Fresh message input with the standard placeholder.
fn message_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Type a message...");
    textarea
}

fn handle_auth_key(
    auth: &mut AuthScreen,
    key: KeyEvent,
    client: &reqwest::Client,
    base_url: &str,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match key.code {
        KeyCode::Tab => match auth.mode {
            AuthMode::SignIn => auth.login.next_field(),
            AuthMode::SignUp => auth.register.next_field(),
        },
        // Ctrl+R flips between sign-in and sign-up.
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            auth.toggle_mode();
        },
        KeyCode::Enter => match auth.mode {
            AuthMode::SignIn => {
                if let Some((username, password)) = auth.login.submit() {
                    spawn_sign_in(
                        client.clone(),
                        base_url.to_owned(),
                        tx.clone(),
                        username,
                        password,
                    );
                }
            },
            AuthMode::SignUp => {
                if let Some(request) = auth.register.submit() {
                    spawn_register(client.clone(), base_url.to_owned(), tx.clone(), request);
                }
            },
        },
        KeyCode::Backspace => {
            let value = match auth.mode {
                AuthMode::SignIn => auth.login.focused_value_mut(),
                AuthMode::SignUp => auth.register.focused_value_mut(),
            };
            value.pop();
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let value = match auth.mode {
                AuthMode::SignIn => auth.login.focused_value_mut(),
                AuthMode::SignUp => auth.register.focused_value_mut(),
            };
            value.push(c);
        },
        _ => {},
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_chat_key(
    chat: &mut ChatScreen,
    key: KeyEvent,
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    tx: &mpsc::UnboundedSender<AppEvent>,
    textarea: &mut TextArea<'static>,
) {
    // Create-channel dialog captures input while open.
    if chat.create_form.is_some() {
        handle_create_dialog_key(chat, key, client, base_url, session, tx);
        return;
    }

    match chat.input_mode {
        InputMode::Insert => match key.code {
            KeyCode::Esc => chat.input_mode = InputMode::Normal,
            KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
                if let Some(view) = &mut chat.chat {
                    view.draft = textarea.lines().join("\n");
                    if let Some(request) = view.begin_send() {
                        spawn_send_message(
                            client.clone(),
                            base_url.to_owned(),
                            session.clone(),
                            tx.clone(),
                            request,
                        );
                    }
                }
            },
            _ => {
                let _ = textarea.input(key);
            },
        },
        InputMode::Normal => match key.code {
            KeyCode::Tab => {
                chat.focus = match chat.focus {
                    Panel::Channels => Panel::Messages,
                    Panel::Messages => Panel::Channels,
                };
            },
            KeyCode::Char('i') => {
                if chat.chat.is_some() {
                    chat.focus = Panel::Messages;
                    chat.input_mode = InputMode::Insert;
                }
            },
            KeyCode::Char('n') => {
                chat.create_form = Some(harbor_state::CreateChannelForm::default());
                chat.create_focus_desc = false;
            },
            KeyCode::Char('j') | KeyCode::Down => match chat.focus {
                Panel::Channels => chat.cursor_down(),
                Panel::Messages => {
                    if let Some(view) = &mut chat.chat {
                        view.scroll_down(1);
                    }
                },
            },
            KeyCode::Char('k') | KeyCode::Up => match chat.focus {
                Panel::Channels => chat.cursor_up(),
                Panel::Messages => {
                    if let Some(view) = &mut chat.chat {
                        view.scroll_up(1);
                    }
                },
            },
            KeyCode::Char('G') => {
                if let Some(view) = &mut chat.chat {
                    view.scroll_offset = 0;
                }
            },
            KeyCode::Enter if chat.focus == Panel::Channels => {
                match chat.entry_under_cursor() {
                    Some(SidebarEntry::Joined(channel)) => {
                        chat.directory.select(channel.id);
                        open_channel(chat, channel.id, client, base_url, session, tx);
                    },
                    Some(SidebarEntry::Joinable(channel)) => {
                        spawn_join_channel(
                            client.clone(),
                            base_url.to_owned(),
                            session.clone(),
                            tx.clone(),
                            channel.id,
                        );
                    },
                    None => {},
                }
            },
            KeyCode::Char('x') if chat.focus == Panel::Channels => {
                if let Some(SidebarEntry::Joined(channel)) = chat.entry_under_cursor() {
                    spawn_leave_channel(
                        client.clone(),
                        base_url.to_owned(),
                        session.clone(),
                        tx.clone(),
                        channel.id,
                    );
                }
            },
            _ => {},
        },
    }
}

fn handle_create_dialog_key(
    chat: &mut ChatScreen,
    key: KeyEvent,
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    let Some(form) = &mut chat.create_form else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            chat.create_form = None;
        },
        KeyCode::Tab => {
            chat.create_focus_desc = !chat.create_focus_desc;
        },
        KeyCode::Enter => {
            // Local validation runs first; nothing is sent on failure.
            if let Some(request) = form.submit() {
                spawn_create_channel(
                    client.clone(),
                    base_url.to_owned(),
                    session.clone(),
                    tx.clone(),
                    request,
                );
            }
        },
        KeyCode::Backspace => {
            if chat.create_focus_desc {
                form.description.pop();
            } else {
                form.name.pop();
            }
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if chat.create_focus_desc {
                form.description.push(c);
            } else {
                form.name.push(c);
            }
        },
        _ => {},
    }
}

/// Select a channel and fetch its thread. The previous load, if still in
/// flight, is not cancelled; its late result fails the stale-channel guard.
fn open_channel(
    chat: &mut ChatScreen,
    channel_id: i64,
    client: &reqwest::Client,
    base_url: &str,
    session: &Session,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    chat.directory.select(channel_id);
    chat.chat = Some(ChatView::new(channel_id));
    spawn_load_messages(
        client.clone(),
        base_url.to_owned(),
        session.clone(),
        tx.clone(),
        channel_id,
    );
}

// ── Background API tasks ─────────────────────────────────────────────────────

fn spawn_sign_in(
    client: reqwest::Client,
    base_url: String,
    tx: mpsc::UnboundedSender<AppEvent>,
    username: String,
    password: String,
) {
    tokio::spawn(async move {
        let result = harbor_api::auth::sign_in(&client, &base_url, &username, &password).await;
        let event = match result {
            Ok(response) => {
                let user = User {
                    id: response.id,
                    username: response.username,
                    email: response.email,
                    display_name: None,
                    bio: None,
                    is_online: None,
                    last_active: None,
                };
                ApiEvent::SignedIn(Ok(Session::authenticated(response.access_token, user)))
            },
            Err(error) => ApiEvent::SignedIn(Err(error.to_string())),
        };
        let _ = tx.send(AppEvent::Api(event));
    });
}

fn spawn_register(
    client: reqwest::Client,
    base_url: String,
    tx: mpsc::UnboundedSender<AppEvent>,
    request: RegisterRequest,
) {
    tokio::spawn(async move {
        let result = harbor_api::auth::sign_up(&client, &base_url, &request)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::Registered(result)));
    });
}

/// Issue the joined-list and global-list fetches in parallel; each resolves
/// on its own and updates only its own slice.
fn spawn_channel_loads(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    {
        let (client, base_url, session, tx) =
            (client.clone(), base_url.clone(), session.clone(), tx.clone());
        tokio::spawn(async move {
            let result = harbor_api::channels::list_mine(&client, &base_url, &session)
                .await
                .map_err(|error| error.to_string());
            let _ = tx.send(AppEvent::Api(ApiEvent::MyChannels(result)));
        });
    }
    tokio::spawn(async move {
        let result = harbor_api::channels::list_all(&client, &base_url, &session)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::AllChannels(result)));
    });
}

fn spawn_load_messages(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
    channel_id: i64,
) {
    tokio::spawn(async move {
        let result = harbor_api::messages::list_by_channel(
            &client,
            &base_url,
            &session,
            channel_id,
            MESSAGE_FETCH_LIMIT,
        )
        .await
        .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::Messages { channel_id, result }));
    });
}

fn spawn_send_message(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
    request: CreateMessageRequest,
) {
    tokio::spawn(async move {
        let result = harbor_api::messages::create(&client, &base_url, &session, &request)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::MessageSent(result)));
    });
}

fn spawn_create_channel(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
    request: CreateChannelRequest,
) {
    tokio::spawn(async move {
        let result = harbor_api::channels::create(&client, &base_url, &session, &request)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::ChannelCreated(result)));
    });
}

fn spawn_join_channel(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
    channel_id: i64,
) {
    tokio::spawn(async move {
        let result = harbor_api::channels::join(&client, &base_url, &session, channel_id)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::ChannelJoined(result)));
    });
}

fn spawn_leave_channel(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
    channel_id: i64,
) {
    tokio::spawn(async move {
        let result = harbor_api::channels::leave(&client, &base_url, &session, channel_id)
            .await
            .map_err(|error| error.to_string());
        let _ = tx.send(AppEvent::Api(ApiEvent::ChannelLeft(result)));
    });
}

fn spawn_sign_out(
    client: reqwest::Client,
    base_url: String,
    session: Session,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        harbor_api::auth::sign_out(&client, &base_url, &session).await;
        let _ = tx.send(AppEvent::Api(ApiEvent::SignedOut));
    });
}
