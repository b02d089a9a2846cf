use harbor_protocol::ApiErrorBody;

/// Crate-wide result type for API calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed failures for outbound API calls.
///
/// Remote failures propagate to the caller unmodified; there is no retry and
/// no local fallback anywhere in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or transport failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No bearer token is held; raised locally without contacting the server.
    #[error("no credential held")]
    MissingCredential,

    /// Response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Turn a response into `T`, decoding the server's error payload on failure.
pub(crate) async fn into_result<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    Err(decode_failure(status.as_u16(), response).await)
}

/// Variant of [`into_result`] for endpoints whose success body is ignored.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(decode_failure(status.as_u16(), response).await)
}

async fn decode_failure(status: u16, response: reqwest::Response) -> Error {
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) if !text.trim().is_empty() => text,
        Err(_) => format!("server returned status {status}"),
    };
    Error::api(status, message)
}

/// Join the configured base URL with an endpoint path.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
