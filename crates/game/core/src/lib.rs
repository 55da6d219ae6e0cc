//! Deterministic adventure rules shared across clients.
//!
//! `game-core` defines the canonical pipeline (command parsing, actions, the
//! reactive engine, world state) and exposes pure APIs that content packs and
//! front ends build on. All state mutation flows through [`engine::Engine`];
//! content crates construct a [`state::World`] and hand it over.
pub mod action;
pub mod attack;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod text;

pub use action::{
    Action, ActionTransition, AttackAction, DropAction, EatAction, GoAction, InventoryAction,
    LookAction, MoveAction, PlayerAttackAction, RevealAction, SayAction, Speaker, TakeAction,
    TurnAction,
};
pub use attack::Attack;
pub use config::GameConfig;
pub use engine::Engine;
pub use error::WorldError;
pub use state::{
    AttackOutcome, Behavior, Contents, Describe, Direction, Door, EatOutcome, Hook, Location,
    Place, PlacedThing, Player, PlayerState, Room, RoomId, Thing, ThingBuilder, ThingId, World,
};
