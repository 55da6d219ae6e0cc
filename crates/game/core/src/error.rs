//! Error types for world construction.
//!
//! Player-facing parse failures and futile domain outcomes are deliberately
//! *not* errors; they travel as narration strings. Only content bugs caught
//! while the maze builder assembles the world surface here.

use crate::state::{Direction, RoomId};

/// Errors raised while building the world graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("room {room} already has a door to the {direction}")]
    DuplicateDoor { room: RoomId, direction: Direction },
}
