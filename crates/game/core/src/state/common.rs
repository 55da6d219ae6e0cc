use std::fmt;

/// Unique identifier for a room in the world arena.
///
/// Ids are issued by [`crate::state::World`] and stay valid for the whole
/// session; rooms are never destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub u32);

impl RoomId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Unique identifier for a thing in the world arena.
///
/// Destroyed things stay in the arena (so ids never dangle) but lose their
/// owner and drop out of every containment list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThingId(pub u32);

impl ThingId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thing#{}", self.0)
    }
}

/// Where a thing currently lives: a room's floor, inside/on another thing,
/// or the player's inventory. A thing has at most one owner at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Place {
    Room(RoomId),
    Thing(ThingId),
    Player,
}

/// Traversal direction for doors.
///
/// Parsed case-insensitively from player input and displayed lowercase in
/// narration ("No door to the east.").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}
