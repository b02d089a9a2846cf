//! Pure view-model state for the Harbor client.
//!
//! Every screen's state is an explicit struct with well-defined transition
//! functions (load-started, load-succeeded, send-failed, ...), so behavior is
//! unit-testable without a rendering harness or a network. The two list
//! transforms live here too: the date-annotated message timeline and the
//! joined/joinable channel partition.

pub mod channels;
pub mod chat;
pub mod login;
pub mod membership;
pub mod timeline;

pub use {
    channels::{ChannelDirectory, CreateChannelForm},
    chat::ChatView,
    login::{AuthField, LoginForm, RegisterForm},
    timeline::{TimelineEntry, assemble, day_label, marker_label},
};
