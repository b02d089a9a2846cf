use {
    super::theme::Theme,
    crate::screen::{AuthMode, AuthScreen},
    harbor_state::AuthField,
    ratatui::{
        Frame,
        layout::Rect,
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    },
};

/// Render the sign-in / sign-up form as a centered card.
pub fn draw(frame: &mut Frame, area: Rect, auth: &AuthScreen, theme: &Theme) {
    let card = super::centered_rect(50, 60, area);
    frame.render_widget(Clear, card);

    let (title, lines) = match auth.mode {
        AuthMode::SignIn => (" Sign In ", sign_in_lines(auth, theme)),
        AuthMode::SignUp => (" Sign Up ", sign_up_lines(auth, theme)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(title);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, card);
}

fn sign_in_lines<'a>(auth: &'a AuthScreen, theme: &Theme) -> Vec<Line<'a>> {
    let form = &auth.login;
    let mut lines = vec![
        Line::from(Span::styled("Welcome to Harbor", theme.heading)),
        Line::from(""),
        field_line(
            "Username",
            &form.username,
            form.focus == AuthField::Username,
            false,
            theme,
        ),
        field_line(
            "Password",
            &form.password,
            form.focus == AuthField::Password,
            true,
            theme,
        ),
        Line::from(""),
    ];

    if form.submitting {
        lines.push(Line::from(Span::styled("Signing in...", theme.loading)));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), theme.error)));
    } else if let Some(notice) = &auth.notice {
        lines.push(Line::from(Span::styled(notice.clone(), theme.notice)));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("No account? Ctrl+R to sign up.", theme));
    lines
}

fn sign_up_lines<'a>(auth: &'a AuthScreen, theme: &Theme) -> Vec<Line<'a>> {
    let form = &auth.register;
    let mut lines = vec![
        Line::from(Span::styled("Create your Harbor account", theme.heading)),
        Line::from(""),
        field_line(
            "Username",
            &form.username,
            form.focus == AuthField::Username,
            false,
            theme,
        ),
        field_line(
            "Email",
            &form.email,
            form.focus == AuthField::Email,
            false,
            theme,
        ),
        field_line(
            "Password",
            &form.password,
            form.focus == AuthField::Password,
            true,
            theme,
        ),
        Line::from(""),
    ];

    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Creating account...",
            theme.loading,
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), theme.error)));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Already registered? Ctrl+R to sign in.", theme));
    lines
}

fn field_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    masked: bool,
    theme: &Theme,
) -> Line<'a> {
    let style = if focused {
        theme.label_focused
    } else {
        theme.label
    };
    let marker = if focused { "> " } else { "  " };
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_owned()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label}: "), style),
        Span::raw(shown),
    ])
}

fn hint_line<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(text, theme.timestamp))
}
