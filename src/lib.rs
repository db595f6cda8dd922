//! Client core for a pairwise image voting tool.
//!
//! The browser frontend (`versus_web`) is a thin Leptos layer over this crate:
//! the server pushes the current pair and progress, the user picks a winner or
//! undoes, and [`shell::AppShell`] keeps the two in sync. Everything here is
//! plain Rust so it can be unit-tested on the host.

pub mod config;
pub mod float_fmt;
pub mod pairing;
pub mod progress;
pub mod protocol;
pub mod shell;

pub use config::ClientConfig;
pub use pairing::{ComparisonPair, Selection};
pub use progress::Progress;
pub use protocol::{ClientAction, ServerPush, Target};
pub use shell::{AppShell, Channel, ChannelError, ConnectionStatus, ViewState};
