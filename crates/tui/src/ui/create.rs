use {
    super::theme::Theme,
    crate::screen::ChatScreen,
    harbor_state::CreateChannelForm,
    ratatui::{
        Frame,
        layout::Rect,
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    },
};

/// Render the create-channel dialog over the chat screen.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    screen: &ChatScreen,
    form: &CreateChannelForm,
    theme: &Theme,
) {
    let popup = super::centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);

    let name_style = if screen.create_focus_desc {
        theme.label
    } else {
        theme.label_focused
    };
    let desc_style = if screen.create_focus_desc {
        theme.label_focused
    } else {
        theme.label
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", name_style),
            Span::raw(form.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Description: ", desc_style),
            Span::raw(form.description.clone()),
        ]),
        Line::from(""),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), theme.error)));
    }
    lines.push(Line::from(Span::styled(
        "Tab to switch fields, Enter to create, Esc to cancel.",
        theme.timestamp,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(" New Channel ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
