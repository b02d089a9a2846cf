use {
    super::theme::Theme,
    crate::screen::ChatScreen,
    chrono::Local,
    harbor_api::Session,
    harbor_state::{assemble, marker_label},
    ratatui::{
        Frame,
        layout::Rect,
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph},
    },
};

/// Render the message thread for the selected channel, with a date chip
/// above the first message of each local calendar day.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    screen: &ChatScreen,
    session: &Session,
    focused: bool,
    theme: &Theme,
) {
    let title = screen
        .directory
        .selected()
        .map_or_else(|| " Messages ".to_owned(), |c| format!(" # {} ", c.name));

    let border_style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner_height = block.inner(area).height as usize;

    let lines = match &screen.chat {
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a channel to start chatting.",
                theme.timestamp,
            )),
        ],
        Some(view) if view.loading => {
            vec![
                Line::from(""),
                Line::from(Span::styled("  Loading messages...", theme.loading)),
            ]
        },
        Some(view) => {
            let mut lines = Vec::new();
            if let Some(error) = &view.error {
                lines.push(Line::from(Span::styled(format!("  {error}"), theme.error)));
            }
            let own_id = session.user().map(|u| u.id);
            for entry in assemble(view.messages.clone()) {
                if entry.starts_new_day {
                    lines.push(Line::from(Span::styled(
                        format!("── {} ──", marker_label(&entry.message)),
                        theme.date_separator,
                    )));
                }
                let message = &entry.message;
                let sender_style = if own_id == Some(message.sender.id) {
                    theme.own_sender
                } else {
                    theme.sender
                };
                let stamp = message
                    .created_at
                    .with_timezone(&Local)
                    .format("%H:%M")
                    .to_string();
                lines.push(Line::from(vec![
                    Span::styled(message.sender.username.clone(), sender_style),
                    Span::styled(format!("  {stamp}"), theme.timestamp),
                ]));
                for text in message.content.lines() {
                    lines.push(Line::from(Span::styled(text.to_owned(), theme.message)));
                }
                lines.push(Line::from(""));
            }
            // Offset 0 pins the view to the newest message.
            let skip = lines
                .len()
                .saturating_sub(inner_height + view.scroll_offset);
            lines.split_off(skip.min(lines.len()))
        },
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
