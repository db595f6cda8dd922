//! Winner/loser resolution for the two comparison tiles.
//!
//! Tiles only report their own name (the stringified target id); the view
//! hosting both tiles turns that into a [`Selection`].

use crate::protocol::{ClientAction, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPair {
    pub target1: Target,
    pub target2: Target,
}

impl ComparisonPair {
    pub fn new(target1: Target, target2: Target) -> Self {
        Self { target1, target2 }
    }

    /// Name a tile reports for `target`.
    pub fn tile_name(target: &Target) -> String {
        target.id.to_string()
    }
}

impl From<[Target; 2]> for ComparisonPair {
    fn from([target1, target2]: [Target; 2]) -> Self {
        Self { target1, target2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub winner: i64,
    pub loser: i64,
}

impl From<Selection> for ClientAction {
    fn from(s: Selection) -> Self {
        ClientAction::Select {
            winner: s.winner,
            loser: s.loser,
        }
    }
}

/// Resolves a click on the tile called `name`.
///
/// Returns `None` when no pair is shown, when the name is not an integer, or
/// when it matches neither target, rather than guessing an attribution.
pub fn resolve(pair: Option<&ComparisonPair>, name: &str) -> Option<Selection> {
    let pair = pair?;
    let clicked: i64 = name.trim().parse().ok()?;

    let (t1, t2) = (pair.target1.id, pair.target2.id);
    if clicked == t1 {
        Some(Selection {
            winner: t1,
            loser: t2,
        })
    } else if clicked == t2 {
        Some(Selection {
            winner: t2,
            loser: t1,
        })
    } else {
        tracing::debug!(name, "click matches neither target; ignored");
        None
    }
}
