pub mod channels;
pub mod chat;
pub mod create;
pub mod input;
pub mod login;
pub mod status_bar;
pub mod theme;

use {
    crate::{
        app::Screen,
        screen::{ChatScreen, Panel},
    },
    harbor_api::Session,
    ratatui::{
        Frame,
        layout::{Constraint, Layout, Rect},
    },
    theme::Theme,
    tui_textarea::TextArea,
};

/// Draw the entire UI.
pub fn draw(
    frame: &mut Frame,
    screen: &Screen,
    session: &Session,
    textarea: &mut TextArea<'_>,
    theme: &Theme,
) {
    let area = frame.area();
    match screen {
        Screen::Auth(auth) => login::draw(frame, area, auth, theme),
        Screen::Chat(chat) => draw_chat_screen(frame, area, chat, session, textarea, theme),
    }
}

fn draw_chat_screen(
    frame: &mut Frame,
    area: Rect,
    screen: &ChatScreen,
    session: &Session,
    textarea: &mut TextArea<'_>,
    theme: &Theme,
) {
    // Vertical: main content + input + status bar
    let vertical = Layout::vertical([
        Constraint::Min(5),    // sidebar + thread
        Constraint::Length(3), // message input
        Constraint::Length(1), // status bar
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Length(28), // channel sidebar
        Constraint::Min(30),    // message thread
    ])
    .split(vertical[0]);

    channels::draw(
        frame,
        horizontal[0],
        screen,
        screen.focus == Panel::Channels,
        theme,
    );
    chat::draw(
        frame,
        horizontal[1],
        screen,
        session,
        screen.focus == Panel::Messages,
        theme,
    );
    input::draw(frame, vertical[1], screen, textarea, theme);
    status_bar::draw(frame, vertical[2], screen, session, theme);

    if let Some(form) = &screen.create_form {
        create::draw(frame, area, screen, form, theme);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
