use super::{Action, ActionTransition, react_in_room};
use crate::state::{Place, ThingId, World};
use crate::text::commify;

/// Transfer of one or more things from the room into the inventory.
///
/// Carries every thing the parser resolved (the `TAKE x AND y` list plus
/// their flattened contents); things the world refuses to release are
/// narrated individually rather than failing the whole action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeAction {
    pub things: Vec<ThingId>,
}

impl TakeAction {
    pub fn new(things: Vec<ThingId>) -> Self {
        Self { things }
    }

    /// Whether this take attempt includes `thing`. Used by hooks that guard
    /// their possessions.
    pub fn taking(&self, thing: ThingId) -> bool {
        self.things.contains(&thing)
    }
}

impl ActionTransition for TakeAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        let mut taken = Vec::new();
        let mut refused = Vec::new();
        for &id in &self.things {
            if world.can_be_taken(id) {
                world.place_thing(id, Place::Player, "in your pack");
                taken.push(format!("the {}", world.thing(id).name()));
            } else {
                refused.push(format!("You can't take the {}.", world.thing(id).name()));
            }
        }

        let mut lines = Vec::new();
        if !taken.is_empty() {
            lines.push(format!("You take {}.", commify(&taken)));
        }
        lines.extend(refused);
        Some(lines.join(" "))
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_take)
    }
}

/// Transfer of a thing from the inventory onto the room floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropAction {
    pub thing: ThingId,
}

impl DropAction {
    pub fn new(thing: ThingId) -> Self {
        Self { thing }
    }
}

impl ActionTransition for DropAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        let room = world.player().room();
        world.place_thing(self.thing, Place::Room(room), "on the floor");
        Some(format!("You drop the {}.", world.thing(self.thing).name()))
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_drop)
    }
}
