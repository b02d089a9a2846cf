/// Errors specific to the TUI client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] harbor_api::Error),
}
