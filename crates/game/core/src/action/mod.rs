//! Validated intents and their effects on the world.
//!
//! An [`Action`] is an immutable, fully validated description of one effect:
//! either the parse of a player command or a follow-up emitted by an
//! entity's reactive hook. Dispatch cannot fail: every "not found" or
//! "don't understand" condition was already turned into a narration string
//! by the command parser and never becomes an action.
//!
//! Each variant implements [`ActionTransition`]: `apply` mutates the world
//! and yields at most one line of narration; `reactions` asks the entities
//! with standing to react (via their behavior-table hooks) for follow-up
//! actions, in order. The engine resolves those recursively.

mod combat;
mod interact;
mod inventory;
mod movement;

pub use combat::{AttackAction, PlayerAttackAction};
pub use interact::{EatAction, InventoryAction, LookAction, SayAction, Speaker, TurnAction};
pub use inventory::{DropAction, TakeAction};
pub use movement::{GoAction, MoveAction, RevealAction};

use crate::attack::Attack;
use crate::state::{Behavior, Direction, Hook, Place, RoomId, ThingId, World};

/// Defines how a concrete action variant affects the world.
pub trait ActionTransition {
    /// Applies the action's direct effect, returning its primary narrative
    /// line, if any. Infallible by construction: only validated actions
    /// reach dispatch.
    fn apply(&self, world: &mut World) -> Option<String>;

    /// Follow-up actions from the entities with standing to react, in the
    /// order they should be dispatched.
    fn reactions(&self, _world: &World) -> Vec<Action> {
        Vec::new()
    }
}

/// Invokes one named hook on everything in the player's current room
/// (nested containment flattened, placement order preserved).
fn react_in_room<A>(
    world: &World,
    action: &A,
    select: impl Fn(&Behavior) -> &Hook<A>,
) -> Vec<Action> {
    world
        .all_things_at(Place::Room(world.player().room()))
        .into_iter()
        .flat_map(|id| {
            let thing = world.thing(id);
            (select(thing.behavior()))(thing, world, action)
        })
        .collect()
}

/// Top-level action enum: everything the engine can dispatch.
#[derive(Clone, Debug)]
pub enum Action {
    Go(GoAction),
    Move(MoveAction),
    Reveal(RevealAction),
    Take(TakeAction),
    Drop(DropAction),
    Look(LookAction),
    Inventory(InventoryAction),
    Eat(EatAction),
    Attack(AttackAction),
    PlayerAttack(PlayerAttackAction),
    Say(SayAction),
    Turn(TurnAction),
}

impl Action {
    pub fn go(room: RoomId, direction: Direction) -> Self {
        Self::Go(GoAction::new(room, direction))
    }

    pub fn move_thing(
        thing: ThingId,
        to: Place,
        phrase: impl Into<String>,
        narration: Option<String>,
    ) -> Self {
        Self::Move(MoveAction::new(thing, to, phrase, narration))
    }

    pub fn reveal(
        room: RoomId,
        direction: Direction,
        description: impl Into<String>,
        to: RoomId,
        narration: Option<String>,
    ) -> Self {
        Self::Reveal(RevealAction::new(room, direction, description, to, narration))
    }

    pub fn take(things: Vec<ThingId>) -> Self {
        Self::Take(TakeAction::new(things))
    }

    pub fn drop(thing: ThingId) -> Self {
        Self::Drop(DropAction::new(thing))
    }

    pub fn look() -> Self {
        Self::Look(LookAction)
    }

    pub fn inventory() -> Self {
        Self::Inventory(InventoryAction)
    }

    pub fn eat(thing: ThingId) -> Self {
        Self::Eat(EatAction::new(thing))
    }

    pub fn attack(target: ThingId, weapon: ThingId) -> Self {
        Self::Attack(AttackAction::new(target, weapon))
    }

    pub fn player_attack(attacker: ThingId, attack: Attack) -> Self {
        Self::PlayerAttack(PlayerAttackAction::new(attacker, attack))
    }

    pub fn say(speaker: Speaker, text: impl Into<String>) -> Self {
        Self::Say(SayAction::new(speaker, text))
    }

    pub fn turn() -> Self {
        Self::Turn(TurnAction)
    }

    /// Snake_case name of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Go(_) => "go",
            Action::Move(_) => "move",
            Action::Reveal(_) => "reveal",
            Action::Take(_) => "take",
            Action::Drop(_) => "drop",
            Action::Look(_) => "look",
            Action::Inventory(_) => "inventory",
            Action::Eat(_) => "eat",
            Action::Attack(_) => "attack",
            Action::PlayerAttack(_) => "player_attack",
            Action::Say(_) => "say",
            Action::Turn(_) => "turn",
        }
    }
}

impl ActionTransition for Action {
    fn apply(&self, world: &mut World) -> Option<String> {
        match self {
            Action::Go(action) => action.apply(world),
            Action::Move(action) => action.apply(world),
            Action::Reveal(action) => action.apply(world),
            Action::Take(action) => action.apply(world),
            Action::Drop(action) => action.apply(world),
            Action::Look(action) => action.apply(world),
            Action::Inventory(action) => action.apply(world),
            Action::Eat(action) => action.apply(world),
            Action::Attack(action) => action.apply(world),
            Action::PlayerAttack(action) => action.apply(world),
            Action::Say(action) => action.apply(world),
            Action::Turn(action) => action.apply(world),
        }
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        match self {
            Action::Go(action) => action.reactions(world),
            Action::Move(action) => action.reactions(world),
            Action::Reveal(action) => action.reactions(world),
            Action::Take(action) => action.reactions(world),
            Action::Drop(action) => action.reactions(world),
            Action::Look(action) => action.reactions(world),
            Action::Inventory(action) => action.reactions(world),
            Action::Eat(action) => action.reactions(world),
            Action::Attack(action) => action.reactions(world),
            Action::PlayerAttack(action) => action.reactions(world),
            Action::Say(action) => action.reactions(world),
            Action::Turn(action) => action.reactions(world),
        }
    }
}
