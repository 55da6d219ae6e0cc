//! World state: the room/thing arena, containment, and entity behavior.

mod behavior;
mod builder;
mod common;
mod location;
mod player;
mod room;
mod thing;
mod world;

pub use behavior::{
    ApplyAttackFn, AttackFn, AttackOutcome, Behavior, Describe, EatFn, EatOutcome, Hook,
    default_apply_attack, default_attack, default_eat,
};
pub use builder::ThingBuilder;
pub use common::{Direction, Place, RoomId, ThingId};
pub use location::{Contents, Location, PlacedThing};
pub use player::{Player, PlayerState};
pub use room::{Door, Room};
pub use thing::Thing;
pub use world::World;
