use {
    harbor_protocol::User,
    reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

/// Holder of the current bearer credential and signed-in profile.
///
/// A `Session` is passed explicitly into every resource-client call; there is
/// no ambient storage lookup. The token is never validated locally — expiry
/// and well-formedness are the server's concern.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

/// The bearer token never appears in debug output; sessions travel inside
/// debug-logged events.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

impl Session {
    /// Session with no credential. Authenticated endpoints will refuse it.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session produced by a successful sign-in.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Session from a bare token, without a profile (CLI `--token` path).
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Header map for outbound calls: a single `Authorization: Bearer <token>`
    /// entry when a token is held, empty otherwise.
    #[must_use]
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            // A token with non-ASCII bytes cannot be sent as a header; the
            // server rejects the unauthenticated request instead.
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Drop the local credential and profile.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "testuser".into(),
            email: "test@example.com".into(),
            display_name: None,
            bio: None,
            is_online: None,
            last_active: None,
        }
    }

    #[test]
    fn auth_header_carries_bearer_token() {
        let session = Session::authenticated("mock-jwt-token", sample_user());
        let headers = session.auth_header();
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer mock-jwt-token")
        );
    }

    #[test]
    fn auth_header_empty_without_token() {
        let session = Session::anonymous();
        assert!(session.auth_header().is_empty());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_output_never_contains_token() {
        let session = Session::authenticated("mock-jwt-token", sample_user());
        let printed = format!("{session:?}");
        assert!(!printed.contains("mock-jwt-token"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn clear_drops_token_and_profile() {
        let mut session = Session::authenticated("mock-jwt-token", sample_user());
        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }
}
