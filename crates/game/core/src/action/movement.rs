use super::{Action, ActionTransition, react_in_room};
use crate::state::{Direction, Place, RoomId, ThingId, World};

/// Player traversal through a registered door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoAction {
    pub room: RoomId,
    pub direction: Direction,
}

impl GoAction {
    pub fn new(room: RoomId, direction: Direction) -> Self {
        Self { room, direction }
    }
}

impl ActionTransition for GoAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        let Some(door) = world.room(self.room).door(self.direction) else {
            // The parser resolves the door before building the action, so
            // this is unreachable unless content mutated doors mid-turn.
            tracing::error!(room = %self.room, direction = %self.direction, "go without door");
            return None;
        };
        let destination = door.to();
        world.player_mut().set_room(destination);
        Some(world.describe_room(destination))
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        // The player has already moved; these are the destination's tenants.
        react_in_room(world, self, |b| &b.on_enter)
    }
}

/// Scripted relocation of a thing, emitted by hooks (a parrot landing on
/// dropped bread, furniture sliding aside).
#[derive(Clone, Debug)]
pub struct MoveAction {
    pub thing: ThingId,
    pub to: Place,
    pub phrase: String,
    pub narration: Option<String>,
}

impl MoveAction {
    pub fn new(
        thing: ThingId,
        to: Place,
        phrase: impl Into<String>,
        narration: Option<String>,
    ) -> Self {
        Self {
            thing,
            to,
            phrase: phrase.into(),
            narration,
        }
    }
}

impl ActionTransition for MoveAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        world.place_thing(self.thing, self.to, self.phrase.clone());
        self.narration.clone()
    }
}

/// Scripted registration of a door, emitted by hooks (a painting that
/// opens a hidden passage).
#[derive(Clone, Debug)]
pub struct RevealAction {
    pub room: RoomId,
    pub direction: Direction,
    pub description: String,
    pub to: RoomId,
    pub narration: Option<String>,
}

impl RevealAction {
    pub fn new(
        room: RoomId,
        direction: Direction,
        description: impl Into<String>,
        to: RoomId,
        narration: Option<String>,
    ) -> Self {
        Self {
            room,
            direction,
            description: description.into(),
            to,
            narration,
        }
    }
}

impl ActionTransition for RevealAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        // Revealing an already-open passage is a silent no-op.
        match world.connect(self.room, &self.description, self.to, self.direction) {
            Ok(()) => self.narration.clone(),
            Err(_) => None,
        }
    }
}
