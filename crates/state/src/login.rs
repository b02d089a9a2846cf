//! Sign-in and sign-up form view models.
//!
//! Pure state with explicit transitions; no rendering and no I/O. Local
//! validation failures short-circuit here and never reach the network layer,
//! and a remote failure leaves the user's input untouched.

use harbor_protocol::RegisterRequest;

/// Which field of a form currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Email,
    Password,
}

/// Sign-in form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: AuthField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Validate and gate submission.
    ///
    /// Returns the credentials to send, or `None` when validation failed or a
    /// sign-in is already in flight. On `Some`, the form is marked submitting
    /// until [`failed`](Self::failed) or [`succeeded`](Self::succeeded).
    pub fn submit(&mut self) -> Option<(String, String)> {
        if self.submitting {
            return None;
        }
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".into());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some((username.to_owned(), self.password.clone()))
    }

    /// Remote sign-in failed; the message is displayed verbatim and the
    /// typed credentials stay in place.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn succeeded(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    /// Cycle focus between username and password.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Password,
            _ => AuthField::Username,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Password => &mut self.password,
            _ => &mut self.username,
        }
    }
}

/// Sign-up form state.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: AuthField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegisterForm {
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        if self.submitting {
            return None;
        }
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            self.error = Some("All fields are required".into());
            return None;
        }
        if !email.contains('@') {
            self.error = Some("Enter a valid email address".into());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn succeeded(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Email,
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}
