use std::fmt;

use super::behavior::{AttackOutcome, Behavior, Describe, EatOutcome};
use super::{Contents, Location, Place, ThingId, World};
use crate::attack::Attack;

/// A thing in the world: anything that is not a room, a door, or the player.
///
/// Identity (name, portability, monster flag) is fixed at construction; hit
/// points and location are mutable. Everything an individual thing *does*
/// (how it describes itself, what eating or attacking it means, how it
/// reacts to nearby actions) lives in its [`Behavior`] table, assembled by
/// [`crate::state::ThingBuilder`].
pub struct Thing {
    id: ThingId,
    name: String,
    portable: bool,
    monster: bool,
    hit_points: i32,
    location: Option<Place>,
    contents: Contents,
    behavior: Behavior,
}

impl Thing {
    pub(crate) fn new(
        name: impl Into<String>,
        portable: bool,
        monster: bool,
        hit_points: i32,
        behavior: Behavior,
    ) -> Self {
        Self {
            // Names are case-insensitive lookup keys; store the canonical form.
            name: name.into().to_uppercase(),
            id: ThingId(u32::MAX),
            portable,
            monster,
            hit_points,
            location: None,
            contents: Contents::new(),
            behavior,
        }
    }

    /// The id the world assigned when this thing entered the arena.
    pub fn id(&self) -> ThingId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ThingId) {
        self.id = id;
    }

    /// Canonical (uppercase) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_portable(&self) -> bool {
        self.portable
    }

    pub fn is_monster(&self) -> bool {
        self.monster
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn alive(&self) -> bool {
        self.hit_points > 0
    }

    pub(crate) fn take_damage(&mut self, damage: i32) {
        self.hit_points -= damage;
    }

    pub fn location(&self) -> Option<Place> {
        self.location
    }

    pub(crate) fn set_location(&mut self, place: Option<Place>) {
        self.location = place;
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Current description, fixed text or computed by the behavior table.
    pub fn description(&self, world: &World) -> String {
        match &self.behavior.describe {
            Describe::Text(text) => text.clone(),
            Describe::With(f) => f(self, world),
        }
    }

    /// The attack this thing delivers when wielded as a weapon.
    pub fn attack(&self, world: &World) -> Attack {
        (self.behavior.attack)(self, world)
    }

    /// What eating this thing would do. The caller applies the outcome.
    pub fn eat_outcome(&self, world: &World) -> EatOutcome {
        (self.behavior.eat)(self, world)
    }

    /// What `attack` landing on this thing would do. The caller applies the
    /// outcome (damage, destruction) to the world.
    pub fn attack_outcome(&self, world: &World, attack: &Attack) -> AttackOutcome {
        (self.behavior.apply_attack)(self, world, attack)
    }
}

impl Location for Thing {
    fn contents(&self) -> &Contents {
        &self.contents
    }

    fn contents_mut(&mut self) -> &mut Contents {
        &mut self.contents
    }

    // Things carried by a living monster stay where they are.
    fn can_take(&self, _thing: &Thing) -> bool {
        !self.alive()
    }
}

impl fmt::Debug for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thing")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("portable", &self.portable)
            .field("monster", &self.monster)
            .field("hit_points", &self.hit_points)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
