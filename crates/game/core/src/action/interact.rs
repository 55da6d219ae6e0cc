use super::{Action, ActionTransition, react_in_room};
use crate::state::{ThingId, World};

/// Re-describes the player's current room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookAction;

impl ActionTransition for LookAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        Some(world.describe_room(world.player().room()))
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_look)
    }
}

/// Lists the player's inventory. A turn still elapses while rummaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryAction;

impl ActionTransition for InventoryAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        Some(world.describe_inventory())
    }
}

/// Eating a thing. The thing's behavior table decides the narration and
/// whether anything is actually consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EatAction {
    pub thing: ThingId,
}

impl EatAction {
    pub fn new(thing: ThingId) -> Self {
        Self { thing }
    }
}

impl ActionTransition for EatAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        let outcome = {
            let w: &World = world;
            w.thing(self.thing).eat_outcome(w)
        };
        if outcome.consumed {
            world.remove_thing(self.thing);
        }
        Some(outcome.narration)
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_eat)
    }
}

/// Who is speaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Player,
    Thing(ThingId),
}

/// Words said out loud, by the player or by a thing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SayAction {
    pub speaker: Speaker,
    pub text: String,
}

impl SayAction {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

impl ActionTransition for SayAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        Some(match self.speaker {
            Speaker::Player => format!("You say, \"{}\"", self.text),
            Speaker::Thing(id) => {
                format!("The {} says, \"{}\"", world.thing(id).name(), self.text)
            }
        })
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_say)
    }
}

/// The ambient end-of-turn action: no direct effect, but every monster in
/// the player's room gets a chance to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnAction;

impl ActionTransition for TurnAction {
    fn apply(&self, _world: &mut World) -> Option<String> {
        None
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        world
            .monsters_in_room()
            .into_iter()
            .flat_map(|id| {
                let thing = world.thing(id);
                (thing.behavior().on_turn)(thing, world, self)
            })
            .collect()
    }
}
