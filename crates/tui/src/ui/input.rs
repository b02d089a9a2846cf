use {
    super::theme::Theme,
    crate::screen::{ChatScreen, InputMode},
    ratatui::{
        Frame,
        layout::Rect,
        style::{Color, Modifier, Style},
        widgets::{Block, Borders},
    },
    tui_textarea::TextArea,
};

/// Render the message input area.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    screen: &ChatScreen,
    textarea: &mut TextArea<'_>,
    theme: &Theme,
) {
    match screen.input_mode {
        InputMode::Insert => {
            let title = if screen.chat.as_ref().is_some_and(|view| view.sending) {
                " Sending... "
            } else {
                " Message (Enter to send, Shift+Enter for newline) "
            };
            textarea.set_cursor_line_style(Style::default());
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_focused)
                    .title(title),
            );
        },
        InputMode::Normal => {
            textarea.set_cursor_line_style(Style::default());
            textarea.set_cursor_style(Style::default().fg(Color::DarkGray));
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border)
                    .title(" Press 'i' to type "),
            );
        },
    }

    frame.render_widget(&*textarea, area);
}
