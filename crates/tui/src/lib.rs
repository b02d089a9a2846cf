mod app;
pub mod error;
mod screen;
mod ui;

pub use {app::App, error::Error};

/// Build the server base URL from `harbor.toml` config.
fn resolve_base_url() -> String {
    harbor_config::discover_and_load().server.base_url
}

/// Entry point for the TUI client.
///
/// When `server` is `None`, the address comes from the local `harbor.toml`
/// config (with `HARBOR_BASE_URL` applied on top).
pub async fn run_tui(server: Option<&str>) -> Result<(), Error> {
    let base_url = match server {
        Some(url) => url.trim_end_matches('/').to_owned(),
        None => resolve_base_url(),
    };

    // Enable focus-change reporting so we can redraw on tab-switch.
    crossterm::execute!(std::io::stdout(), crossterm::event::EnableFocusChange)
        .map_err(Error::Terminal)?;

    let terminal = ratatui::init();
    let result = App::new(base_url).run(terminal).await;
    ratatui::restore();

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableFocusChange);

    result
}
