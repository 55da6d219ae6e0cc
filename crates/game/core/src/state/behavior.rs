//! Per-instance behavior tables.
//!
//! Instead of one subclass per kind of thing, every [`Thing`] carries a table
//! of named behavior functions, each defaulting to the shared baseline. A
//! one-off personality (a parrot that chases dropped bread, a monster that
//! leaves an edible corpse) is expressed by overriding single entries at
//! construction time via [`crate::state::ThingBuilder`].
//!
//! Behavior functions are pure: they read the world and return values or
//! follow-up [`Action`]s; all mutation happens in the action that consumes
//! the returned outcome. That purity is what lets the dispatch engine invoke
//! hooks mid-cascade without aliasing trouble.

use crate::action::{
    Action, AttackAction, DropAction, EatAction, GoAction, LookAction, PlayerAttackAction,
    SayAction, TakeAction, TurnAction,
};
use crate::attack::Attack;
use crate::state::{Thing, World};
use crate::text::{a, number_of};

/// How a thing renders itself. Exactly one of the two is ever active.
pub enum Describe {
    Text(String),
    With(Box<dyn Fn(&Thing, &World) -> String>),
}

/// Result of eating a thing: what to say, and whether the thing is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EatOutcome {
    pub narration: String,
    pub consumed: bool,
}

/// Result of an attack landing on a thing. Computed pure, applied by
/// [`crate::action::AttackAction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: i32,
    pub narration: String,
    pub destroyed: bool,
}

pub type EatFn = Box<dyn Fn(&Thing, &World) -> EatOutcome>;
pub type AttackFn = Box<dyn Fn(&Thing, &World) -> Attack>;
pub type ApplyAttackFn = Box<dyn Fn(&Thing, &World, &Attack) -> AttackOutcome>;

/// A reactive hook: invoked when an action of type `A` happens nearby,
/// returns follow-up actions in the order they should be dispatched.
pub type Hook<A> = Box<dyn Fn(&Thing, &World, &A) -> Vec<Action>>;

/// The full capability table of a thing.
pub struct Behavior {
    pub describe: Describe,
    pub eat: EatFn,
    pub attack: AttackFn,
    pub apply_attack: ApplyAttackFn,
    pub on_turn: Hook<TurnAction>,
    pub on_enter: Hook<GoAction>,
    pub on_take: Hook<TakeAction>,
    pub on_drop: Hook<DropAction>,
    pub on_look: Hook<LookAction>,
    pub on_eat: Hook<EatAction>,
    pub on_say: Hook<SayAction>,
    pub on_attack: Hook<AttackAction>,
    pub on_player_attack: Hook<PlayerAttackAction>,
}

impl Behavior {
    /// The baseline table: fixed description, inedible, useless as a weapon,
    /// standard attack resolution, no reactions.
    pub fn baseline(description: impl Into<String>) -> Self {
        Self {
            describe: Describe::Text(description.into()),
            eat: Box::new(default_eat),
            attack: Box::new(default_attack),
            apply_attack: Box::new(default_apply_attack),
            on_turn: empty_hook(),
            on_enter: empty_hook(),
            on_take: empty_hook(),
            on_drop: empty_hook(),
            on_look: empty_hook(),
            on_eat: empty_hook(),
            on_say: empty_hook(),
            on_attack: empty_hook(),
            on_player_attack: empty_hook(),
        }
    }
}

fn empty_hook<A>() -> Hook<A> {
    Box::new(|_, _, _| Vec::new())
}

/// Baseline eat: refusal, nothing consumed.
pub fn default_eat(thing: &Thing, world: &World) -> EatOutcome {
    EatOutcome {
        narration: format!("Yuck. You can't eat {}.", a(&thing.description(world))),
        consumed: false,
    }
}

/// Baseline weapon value: no damage, futility narration.
pub fn default_attack(thing: &Thing, world: &World) -> Attack {
    Attack::useless(format!(
        "{} is not an effective weapon.",
        a(&thing.description(world))
    ))
}

/// Baseline attack resolution: monsters take the damage and are wounded or
/// dead by the sign of the remaining hit points (dead monsters are removed
/// from their location); anything else rejects the attack outright.
pub fn default_apply_attack(thing: &Thing, _world: &World, attack: &Attack) -> AttackOutcome {
    if thing.is_monster() {
        let damage = attack.damage();
        let remaining = thing.hit_points() - damage;
        let fate = if remaining > 0 {
            "wounded but still alive. And now it's mad."
        } else {
            "dead. Good job, murderer."
        };
        AttackOutcome {
            damage,
            narration: format!(
                "After {} of damage, the {} is {}",
                number_of(damage, "point"),
                thing.name(),
                fate
            ),
            destroyed: remaining <= 0,
        }
    } else {
        AttackOutcome {
            damage: 0,
            narration: format!(
                "I don't know why you're attacking an innocent {}.",
                thing.name()
            ),
            destroyed: false,
        }
    }
}
