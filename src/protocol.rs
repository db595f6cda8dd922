//! Wire protocol spoken over the voting WebSocket.
//!
//! The server pushes a full [`ServerPush`] after connecting and after every
//! client action. The client only ever sends [`ClientAction`] frames.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One image candidate in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: i64,
    pub rate: f64,
    pub src: String,
}

/// Completed comparisons versus the total the server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matches {
    pub finished: u64,
    pub total: u64,
}

/// Authoritative state pushed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPush {
    pub matches: Matches,
    pub target: [Target; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ClientAction {
    Select { winner: i64, loser: i64 },
    Undo,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed server message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server sent the same target twice (id {0})")]
    DuplicateTarget(i64),
}

/// Parses one inbound text frame.
///
/// Both targets must carry distinct ids; otherwise a click could not be
/// attributed to a winner.
pub fn decode_push(raw: &str) -> Result<ServerPush, ProtocolError> {
    let push: ServerPush = serde_json::from_str(raw)?;
    let [a, b] = &push.target;
    if a.id == b.id {
        return Err(ProtocolError::DuplicateTarget(a.id));
    }
    Ok(push)
}

pub fn encode_action(action: &ClientAction) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(action)?)
}
