//! The containment capability shared by rooms, things, and the player.

use super::{Thing, ThingId};

/// A thing plus the phrase describing how it sits within its container
/// ("on", "inside", "against the wall"). The phrase is used only when
/// rendering descriptions, never for game logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedThing {
    pub thing: ThingId,
    pub phrase: String,
}

/// An insertion-ordered collection of placed things.
///
/// Order is load-bearing: narration and hook invocation both walk contents
/// in the order things were placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contents {
    placed: Vec<PlacedThing>,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedThing> {
        self.placed.iter()
    }

    pub(crate) fn add(&mut self, thing: ThingId, phrase: impl Into<String>) {
        self.placed.push(PlacedThing {
            thing,
            phrase: phrase.into(),
        });
    }

    pub(crate) fn remove(&mut self, thing: ThingId) {
        self.placed.retain(|pt| pt.thing != thing);
    }
}

/// The Location capability: anything that can contain things.
///
/// Implemented by `Room`, `Thing`, and `Player`; the world funnels every
/// containment mutation through [`crate::state::World::place_thing`] and
/// [`crate::state::World::remove_thing`] so the owner's contents and the
/// thing's back-reference always agree.
pub trait Location {
    fn contents(&self) -> &Contents;

    fn contents_mut(&mut self) -> &mut Contents;

    /// Whether this container currently lets `thing` be taken out of it.
    fn can_take(&self, thing: &Thing) -> bool;
}
