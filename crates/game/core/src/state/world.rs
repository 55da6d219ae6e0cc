use super::{Direction, Door, Location, Place, Player, Room, RoomId, Thing, ThingId};
use crate::error::WorldError;
use crate::text::{a, capitalize, commify};

/// The world arena: every room and thing, addressed by stable id, plus the
/// player.
///
/// All containment mutation funnels through [`World::place_thing`] and
/// [`World::remove_thing`], which keep a thing's location back-reference and
/// its owner's contents list in agreement atomically. The engine is the only
/// writer during play; content construction is the only writer before it.
pub struct World {
    rooms: Vec<Room>,
    things: Vec<Thing>,
    player: Player,
}

impl World {
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            things: Vec::new(),
            player: Player::new(RoomId(0), 0),
        }
    }

    // ------------------------------------------------------------------
    // Construction

    pub fn add_room(&mut self, description: impl Into<String>) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room::new(description));
        id
    }

    /// Registers a directed door: `to` becomes reachable from `from` via
    /// `direction`. The reverse edge is never implied.
    pub fn connect(
        &mut self,
        from: RoomId,
        description: &str,
        to: RoomId,
        direction: Direction,
    ) -> Result<(), WorldError> {
        let door = Door::new(description, to);
        if self.room_mut(from).add_door(direction, door) {
            Ok(())
        } else {
            Err(WorldError::DuplicateDoor {
                room: from,
                direction,
            })
        }
    }

    /// Moves a built thing into the arena and hands back its id.
    pub fn add_thing(&mut self, mut thing: Thing) -> ThingId {
        let id = ThingId(self.things.len() as u32);
        thing.set_id(id);
        self.things.push(thing);
        id
    }

    /// Puts the player in `room` with `hit_points` to lose.
    pub fn spawn_player(&mut self, room: RoomId, hit_points: i32) {
        self.player = Player::new(room, hit_points);
    }

    // ------------------------------------------------------------------
    // Access
    //
    // Id lookups index the arena directly: ids are only ever issued by this
    // world, so a miss is a bug in the caller, not a runtime condition.

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    pub fn thing(&self, id: ThingId) -> &Thing {
        &self.things[id.index()]
    }

    pub(crate) fn thing_mut(&mut self, id: ThingId) -> &mut Thing {
        &mut self.things[id.index()]
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn location(&self, place: Place) -> &dyn Location {
        match place {
            Place::Room(id) => self.room(id),
            Place::Thing(id) => self.thing(id),
            Place::Player => &self.player,
        }
    }

    fn location_mut(&mut self, place: Place) -> &mut dyn Location {
        match place {
            Place::Room(id) => self.room_mut(id),
            Place::Thing(id) => self.thing_mut(id),
            Place::Player => &mut self.player,
        }
    }

    // ------------------------------------------------------------------
    // Containment

    /// Places `thing` at `place` with the given placement phrase, removing
    /// it from its previous owner first. Location back-reference and both
    /// contents lists stay consistent.
    pub fn place_thing(&mut self, thing: ThingId, place: Place, phrase: impl Into<String>) {
        if let Some(old) = self.thing(thing).location() {
            self.location_mut(old).contents_mut().remove(thing);
        }
        self.location_mut(place).contents_mut().add(thing, phrase);
        self.thing_mut(thing).set_location(Some(place));
    }

    /// Unlinks `thing` from its owner. The thing stays in the arena (ids
    /// never dangle) but no longer exists anywhere in the world.
    pub fn remove_thing(&mut self, thing: ThingId) {
        if let Some(place) = self.thing(thing).location() {
            self.location_mut(place).contents_mut().remove(thing);
        }
        self.thing_mut(thing).set_location(None);
    }

    /// Whether `thing` can currently be picked up: inherently portable, and
    /// released by its owner (a living monster holds on to its cargo).
    pub fn can_be_taken(&self, thing: ThingId) -> bool {
        let t = self.thing(thing);
        t.is_portable()
            && t.location()
                .is_some_and(|place| self.location(place).can_take(t))
    }

    // ------------------------------------------------------------------
    // Resolution

    /// Everything at `place`, nested containment flattened depth-first in
    /// placement order.
    pub fn all_things_at(&self, place: Place) -> Vec<ThingId> {
        let mut out = Vec::new();
        self.collect_things(place, &mut out);
        out
    }

    fn collect_things(&self, place: Place, out: &mut Vec<ThingId>) {
        for pt in self.location(place).contents().iter() {
            out.push(pt.thing);
            self.collect_things(Place::Thing(pt.thing), out);
        }
    }

    /// Case-insensitive name lookup at `place`, nested containment included.
    pub fn thing_at(&self, place: Place, name: &str) -> Option<ThingId> {
        self.all_things_at(place)
            .into_iter()
            .find(|&id| self.thing(id).name().eq_ignore_ascii_case(name))
    }

    /// Looks the name up in the player's current room.
    pub fn room_thing(&self, name: &str) -> Option<ThingId> {
        self.thing_at(Place::Room(self.player.room()), name)
    }

    /// Looks the name up in the player's inventory.
    pub fn inventory_thing(&self, name: &str) -> Option<ThingId> {
        self.thing_at(Place::Player, name)
    }

    /// Inventory first, then the current room.
    pub fn visible_thing(&self, name: &str) -> Option<ThingId> {
        self.inventory_thing(name).or_else(|| self.room_thing(name))
    }

    /// Monsters in the player's current room, nested containment included.
    pub fn monsters_in_room(&self) -> Vec<ThingId> {
        self.all_things_at(Place::Room(self.player.room()))
            .into_iter()
            .filter(|&id| self.thing(id).is_monster())
            .collect()
    }

    /// The room's single living monster, if there is exactly one. Lets
    /// `ATTACK WITH axe` leave the target implicit.
    pub fn only_monster(&self) -> Option<ThingId> {
        let monsters: Vec<ThingId> = self
            .monsters_in_room()
            .into_iter()
            .filter(|&id| self.thing(id).alive())
            .collect();
        match monsters.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Target resolution for the ATTACK verb: the literal token WITH means
    /// the target was omitted and falls back to the room's only monster.
    pub fn implicit_monster(&self, name: &str) -> Option<ThingId> {
        if name.eq_ignore_ascii_case("WITH") {
            self.only_monster()
        } else {
            self.room_thing(name)
        }
    }

    // ------------------------------------------------------------------
    // Narration

    /// The full description of a room: the room itself, its contents
    /// (nested things included), then its exits.
    pub fn describe_room(&self, id: RoomId) -> String {
        let room = self.room(id);
        let mut parts = vec![format!("You are in {}.", room.description())];
        for pt in room.contents().iter() {
            let thing = self.thing(pt.thing);
            parts.push(format!(
                "{} is {}.",
                capitalize(&pt.phrase),
                a(&thing.description(self))
            ));
            self.describe_contents(pt.thing, &mut parts);
        }
        for (direction, door) in room.doors() {
            parts.push(format!(
                "There is {} to the {direction}.",
                a(door.description())
            ));
        }
        parts.join(" ")
    }

    fn describe_contents(&self, id: ThingId, parts: &mut Vec<String>) {
        let container = self.thing(id);
        for pt in container.contents().iter() {
            let thing = self.thing(pt.thing);
            parts.push(format!(
                "{} the {} is {}.",
                capitalize(&pt.phrase),
                container.name(),
                a(&thing.description(self))
            ));
            self.describe_contents(pt.thing, parts);
        }
    }

    pub fn describe_inventory(&self) -> String {
        if self.player.contents().is_empty() {
            return "You've got nothing!".to_string();
        }
        let items: Vec<String> = self
            .player
            .contents()
            .iter()
            .map(|pt| a(&self.thing(pt.thing).description(self)))
            .collect();
        format!("You have {}.", commify(&items))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
