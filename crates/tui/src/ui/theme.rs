use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub sender: Style,
    pub own_sender: Style,
    pub timestamp: Style,
    pub message: Style,
    pub date_separator: Style,
    pub error: Style,
    pub notice: Style,
    pub heading: Style,
    pub label: Style,
    pub label_focused: Style,
    pub sidebar_section: Style,
    pub sidebar_active: Style,
    pub sidebar_item: Style,
    pub sidebar_joinable: Style,
    pub mode_normal: Style,
    pub mode_insert: Style,
    pub status_user: Style,
    pub loading: Style,
    pub border: Style,
    pub border_focused: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sender: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            own_sender: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(Color::DarkGray),
            message: Style::default().fg(Color::White),
            date_separator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::DIM),
            error: Style::default().fg(Color::Red),
            notice: Style::default().fg(Color::Green),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::White),
            label_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            sidebar_section: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            sidebar_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            sidebar_item: Style::default().fg(Color::White),
            sidebar_joinable: Style::default().fg(Color::DarkGray),
            mode_normal: Style::default().bg(Color::Blue).fg(Color::White),
            mode_insert: Style::default().bg(Color::Green).fg(Color::Black),
            status_user: Style::default().bg(Color::Green).fg(Color::Black),
            loading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::DIM),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
        }
    }
}
