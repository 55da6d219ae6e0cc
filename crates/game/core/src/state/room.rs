use super::{Contents, Direction, Location, RoomId, Thing};

/// A named, described traversal to another room.
///
/// Doors are directed: registering a door from A east to B makes B reachable
/// from A via east, and nothing else. Return travel needs its own entry on
/// B. Secret passages and one-way drops rely on this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Door {
    description: String,
    to: RoomId,
}

impl Door {
    pub fn new(description: impl Into<String>, to: RoomId) -> Self {
        Self {
            description: description.into(),
            to,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn to(&self) -> RoomId {
        self.to
    }
}

/// A room: a description, at most one door per direction, and contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    description: String,
    doors: Vec<(Direction, Door)>,
    contents: Contents,
}

impl Room {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            doors: Vec::new(),
            contents: Contents::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn door(&self, direction: Direction) -> Option<&Door> {
        self.doors
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, door)| door)
    }

    /// Doors in registration order.
    pub fn doors(&self) -> impl Iterator<Item = (Direction, &Door)> {
        self.doors.iter().map(|(d, door)| (*d, door))
    }

    pub(crate) fn add_door(&mut self, direction: Direction, door: Door) -> bool {
        if self.door(direction).is_some() {
            return false;
        }
        self.doors.push((direction, door));
        true
    }
}

impl Location for Room {
    fn contents(&self) -> &Contents {
        &self.contents
    }

    fn contents_mut(&mut self) -> &mut Contents {
        &mut self.contents
    }

    fn can_take(&self, _thing: &Thing) -> bool {
        true
    }
}
