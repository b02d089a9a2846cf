use {
    super::theme::Theme,
    crate::screen::{ChatScreen, InputMode},
    harbor_api::Session,
    ratatui::{
        Frame,
        layout::{Constraint, Layout, Rect},
        text::{Line, Span},
        widgets::Paragraph,
    },
};

/// Render the status bar at the bottom of the chat screen.
pub fn draw(frame: &mut Frame, area: Rect, screen: &ChatScreen, session: &Session, theme: &Theme) {
    let layout = Layout::horizontal([
        Constraint::Length(10), // mode indicator
        Constraint::Min(1),     // status info
    ])
    .split(area);

    let (mode_text, mode_style) = match screen.input_mode {
        InputMode::Normal => (" NORMAL ", theme.mode_normal),
        InputMode::Insert => (" INSERT ", theme.mode_insert),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(mode_text, mode_style))),
        layout[0],
    );

    let mut parts: Vec<Span<'_>> = Vec::new();
    if let Some(user) = session.user() {
        parts.push(Span::styled(format!(" {} ", user.username), theme.status_user));
    }
    if let Some(channel) = screen.directory.selected() {
        parts.push(Span::raw(format!(" | #{} ", channel.name)));
    }
    if screen.directory.is_loading() {
        parts.push(Span::styled(" loading... ", theme.loading));
    }
    parts.push(Span::raw(
        " | j/k move · Enter open/join · n new · x leave · Ctrl+L sign out · q quit",
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), layout[1]);
}
