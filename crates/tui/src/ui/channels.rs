use {
    super::theme::Theme,
    crate::screen::{ChatScreen, SidebarEntry},
    ratatui::{
        Frame,
        layout::Rect,
        text::{Line, Span},
        widgets::{Block, Borders, List, ListItem},
    },
};

/// Render the channel sidebar: joined channels first, then the joinable
/// remainder under a "Browse" header.
pub fn draw(frame: &mut Frame, area: Rect, screen: &ChatScreen, focused: bool, theme: &Theme) {
    let mut items: Vec<ListItem<'_>> = Vec::new();

    if screen.directory.is_loading() {
        items.push(ListItem::new(Line::from(Span::styled(
            "Loading channels...",
            theme.loading,
        ))));
    } else if let Some(error) = &screen.directory.error {
        items.push(ListItem::new(Line::from(Span::styled(
            error.clone(),
            theme.error,
        ))));
    }

    items.push(ListItem::new(Line::from(Span::styled(
        "My Channels",
        theme.sidebar_section,
    ))));

    let entries = screen.sidebar_entries();
    let mut browse_header_emitted = false;
    for (index, entry) in entries.iter().enumerate() {
        if matches!(entry, SidebarEntry::Joinable(_)) && !browse_header_emitted {
            items.push(ListItem::new(Line::from(Span::styled(
                "Browse",
                theme.sidebar_section,
            ))));
            browse_header_emitted = true;
        }
        items.push(entry_item(screen, index, entry, theme));
    }

    let border_style = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Channels "),
    );
    frame.render_widget(list, area);
}

fn entry_item<'a>(
    screen: &ChatScreen,
    index: usize,
    entry: &'a SidebarEntry,
    theme: &Theme,
) -> ListItem<'a> {
    let under_cursor = screen.cursor == index;
    let channel = entry.channel();

    let mut spans = Vec::new();
    spans.push(if under_cursor {
        Span::styled("> ", theme.sidebar_active)
    } else {
        Span::raw("  ")
    });

    match entry {
        SidebarEntry::Joined(channel) => {
            let selected = screen.directory.selected_id == Some(channel.id);
            let style = if selected {
                theme.sidebar_active
            } else {
                theme.sidebar_item
            };
            spans.push(Span::styled(format!("# {}", channel.name), style));
            if !channel.members.is_empty() {
                spans.push(Span::styled(
                    format!(" ({})", channel.members.len()),
                    theme.timestamp,
                ));
            }
        },
        SidebarEntry::Joinable(_) => {
            spans.push(Span::styled(
                format!("# {}", channel.name),
                theme.sidebar_joinable,
            ));
            if under_cursor {
                spans.push(Span::styled(" [Enter to join]", theme.timestamp));
            }
        },
    }

    ListItem::new(Line::from(spans))
}
