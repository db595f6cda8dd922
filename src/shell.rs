//! The app-level controller: owns the channel and the canonical view state.
//!
//! ```text
//! ENABLED --(select | undo)--> DISABLED --(server push)--> ENABLED
//! ```
//!
//! The shell starts DISABLED and only a server push enables it. Accepted
//! actions disable it and clear the pair before the frame goes out, so a
//! second click in the round-trip window is dropped.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::pairing::{ComparisonPair, Selection};
use crate::progress::Progress;
use crate::protocol::{self, ClientAction, ServerPush};

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("no channel attached")]
    NotConnected,
    #[error("channel closed")]
    Closed,
    #[error("send failed: {0}")]
    Send(String),
}

/// Outbound half of the connection to the voting server.
pub trait Channel {
    fn send_text(&self, text: &str) -> Result<(), ChannelError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

/// Immutable snapshot handed to the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub progress: Progress,
    pub pair: Option<ComparisonPair>,
    pub disabled: bool,
    pub connection: ConnectionStatus,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            progress: Progress::default(),
            pair: None,
            disabled: true,
            connection: ConnectionStatus::Connecting,
        }
    }
}

pub struct AppShell<C> {
    state: ViewState,
    channel: Option<C>,
}

impl<C: Channel> Default for AppShell<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Channel> AppShell<C> {
    pub fn new() -> Self {
        Self {
            state: ViewState::default(),
            channel: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    pub fn attach(&mut self, channel: C) {
        self.channel = Some(channel);
        self.state.connection = ConnectionStatus::Connecting;
    }

    pub fn on_open(&mut self) {
        info!("connected to voting server");
        self.state.connection = ConnectionStatus::Open;
    }

    /// The server went away. No reconnect: the page must be reloaded.
    pub fn on_close(&mut self) {
        if self.state.connection != ConnectionStatus::Closed {
            warn!("connection to voting server closed; reload the page to resume");
        }
        self.state.connection = ConnectionStatus::Closed;
        self.channel = None;
    }

    /// Handles one inbound text frame. Malformed frames leave state untouched.
    pub fn on_message(&mut self, raw: &str) -> bool {
        match protocol::decode_push(raw) {
            Ok(push) => {
                self.apply_push(push);
                true
            }
            Err(e) => {
                warn!("dropping server message: {}", e);
                false
            }
        }
    }

    /// Replaces progress and pair wholesale and re-enables the controls.
    pub fn apply_push(&mut self, push: ServerPush) {
        let progress = Progress::from(push.matches);
        debug!(now = progress.now, total = progress.total, "server push");
        self.state.progress = progress;
        self.state.pair = Some(ComparisonPair::from(push.target));
        self.state.disabled = false;
    }

    pub fn select(&mut self, selection: Selection) -> bool {
        self.submit(selection.into())
    }

    pub fn undo(&mut self) -> bool {
        self.submit(ClientAction::Undo)
    }

    /// Returns whether the action was accepted. Accepted actions always
    /// disable the shell, even if the frame could not be delivered.
    fn submit(&mut self, action: ClientAction) -> bool {
        if self.state.disabled {
            debug!(?action, "controls disabled; action dropped");
            return false;
        }

        self.state.disabled = true;
        self.state.pair = None;

        if let Err(e) = self.send(&action) {
            warn!(?action, "action not delivered: {}", e);
        }
        true
    }

    fn send(&self, action: &ClientAction) -> Result<(), ChannelError> {
        let channel = match (&self.channel, self.state.connection) {
            (_, ConnectionStatus::Closed) => return Err(ChannelError::Closed),
            (None, _) => return Err(ChannelError::NotConnected),
            (Some(c), _) => c,
        };
        let text = protocol::encode_action(action).map_err(|e| ChannelError::Send(e.to_string()))?;
        channel.send_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn frames(&self) -> Vec<Value> {
            self.sent
                .borrow()
                .iter()
                .map(|s| serde_json::from_str(s).unwrap())
                .collect()
        }
    }

    impl Channel for Recorder {
        fn send_text(&self, text: &str) -> Result<(), ChannelError> {
            self.sent.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn push_json(finished: u64, total: u64, a: i64, b: i64) -> String {
        json!({
            "matches": {"finished": finished, "total": total},
            "target": [
                {"id": a, "rate": 0.5, "src": "a"},
                {"id": b, "rate": 0.5, "src": "b"}
            ]
        })
        .to_string()
    }

    fn connected() -> (AppShell<Recorder>, Recorder) {
        let rec = Recorder::default();
        let mut shell = AppShell::new();
        shell.attach(rec.clone());
        shell.on_open();
        (shell, rec)
    }

    #[test]
    fn starts_disabled_with_no_pair() {
        let shell: AppShell<Recorder> = AppShell::new();
        let s = shell.state();
        assert!(s.disabled);
        assert!(s.pair.is_none());
        assert_eq!(s.progress, Progress::new(0, 0));
    }

    #[test]
    fn push_replaces_state_and_enables() {
        let (mut shell, _) = connected();
        assert!(shell.on_message(&push_json(4, 9, 11, 12)));

        let s = shell.state();
        assert!(!s.disabled);
        assert_eq!(s.progress, Progress::new(4, 9));
        let pair = s.pair.as_ref().unwrap();
        assert_eq!(pair.target1.id, 11);
        assert_eq!(pair.target2.id, 12);
    }

    #[test]
    fn same_push_twice_is_idempotent() {
        let (mut shell, _) = connected();
        shell.on_message(&push_json(1, 5, 1, 2));
        let once = shell.snapshot();
        shell.on_message(&push_json(1, 5, 1, 2));
        assert_eq!(shell.snapshot(), once);
    }

    #[test]
    fn actions_while_disabled_send_nothing() {
        let (mut shell, rec) = connected();
        let before = shell.snapshot();

        assert!(!shell.select(Selection { winner: 1, loser: 2 }));
        assert!(!shell.undo());

        assert!(rec.frames().is_empty());
        assert_eq!(shell.snapshot(), before);
    }

    #[test]
    fn accepted_select_sends_once_and_clears() {
        let (mut shell, rec) = connected();
        shell.on_message(&push_json(0, 3, 5, 6));

        assert!(shell.select(Selection { winner: 6, loser: 5 }));
        assert!(!shell.select(Selection { winner: 6, loser: 5 }));

        assert_eq!(
            rec.frames(),
            vec![json!({"action": "select", "winner": 6, "loser": 5})]
        );
        let s = shell.state();
        assert!(s.disabled);
        assert!(s.pair.is_none());
        assert_eq!(s.progress, Progress::new(0, 3));
    }

    #[test]
    fn accepted_undo_sends_once_and_clears() {
        let (mut shell, rec) = connected();
        shell.on_message(&push_json(2, 3, 5, 6));

        assert!(shell.undo());
        assert!(!shell.undo());

        assert_eq!(rec.frames(), vec![json!({"action": "undo"})]);
        assert!(shell.state().disabled);
        assert!(shell.state().pair.is_none());
    }

    #[test]
    fn malformed_push_keeps_prior_state() {
        let (mut shell, _) = connected();
        shell.on_message(&push_json(1, 2, 7, 8));
        let before = shell.snapshot();

        assert!(!shell.on_message("{\"matches\": 3}"));
        assert!(!shell.on_message(&push_json(1, 2, 7, 7)));
        assert_eq!(shell.snapshot(), before);
    }

    #[test]
    fn malformed_push_does_not_enable() {
        let (mut shell, _) = connected();
        assert!(!shell.on_message("[]"));
        assert!(shell.state().disabled);
    }

    #[test]
    fn closed_channel_leaves_ui_stuck_after_action() {
        let (mut shell, rec) = connected();
        shell.on_message(&push_json(0, 2, 1, 2));
        shell.on_close();
        assert_eq!(shell.state().connection, ConnectionStatus::Closed);

        assert!(shell.undo());
        assert!(rec.frames().is_empty());
        assert!(shell.state().disabled);
        assert!(!shell.undo());
    }

    #[test]
    fn full_vote_cycle() {
        let (mut shell, rec) = connected();

        let first = json!({
            "matches": {"finished": 2, "total": 10},
            "target": [
                {"id": 1, "rate": 0.5, "src": "a"},
                {"id": 2, "rate": 0.5, "src": "b"}
            ]
        });
        shell.on_message(&first.to_string());
        {
            let s = shell.state();
            let pair = s.pair.as_ref().unwrap();
            assert_eq!((pair.target1.id, pair.target2.id), (1, 2));
            assert_eq!(s.progress, Progress::new(2, 10));
            assert!(!s.disabled);
        }

        let pick = crate::pairing::resolve(shell.state().pair.as_ref(), "2").unwrap();
        assert!(shell.select(pick));
        assert_eq!(
            rec.frames(),
            vec![json!({"action": "select", "winner": 2, "loser": 1})]
        );
        assert!(shell.state().disabled);
        assert!(shell.state().pair.is_none());

        shell.on_message(&push_json(3, 10, 4, 9));
        let s = shell.state();
        assert!(!s.disabled);
        assert_eq!(s.progress, Progress::new(3, 10));
        assert_eq!(s.pair.as_ref().unwrap().target2.id, 9);
    }
}
