use super::{Contents, Location, RoomId, Thing};
use crate::text::number_of;

/// The protagonist: an inventory, a current room, and hit points.
///
/// The current-room reference here is the single source of truth for where
/// the player is. Exactly one player exists per session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    room: RoomId,
    hit_points: i32,
    inventory: Contents,
}

/// Snapshot of observable player state, captured before a turn and diffed
/// after it for delta-based narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub hit_points: i32,
}

impl Player {
    pub(crate) fn new(room: RoomId, hit_points: i32) -> Self {
        Self {
            room,
            hit_points,
            inventory: Contents::new(),
        }
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub(crate) fn set_room(&mut self, room: RoomId) {
        self.room = room;
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

    pub fn snapshot(&self) -> PlayerState {
        PlayerState {
            hit_points: self.hit_points,
        }
    }

    /// Narrates what changed since `before`. Currently only damage taken;
    /// at most one line per turn, and a pure diff; it never re-enters the
    /// dispatch engine.
    pub fn state_changes(&self, before: &PlayerState) -> Option<String> {
        let damage = before.hit_points - self.hit_points;
        (damage > 0).then(|| {
            let status = if self.alive() {
                format!("You're down to {}.", self.hit_points)
            } else {
                "You feel consciousness slipping away.".to_string()
            };
            format!(
                "You take {} of damage. {status}",
                number_of(damage, "hit point")
            )
        })
    }
}

impl Location for Player {
    fn contents(&self) -> &Contents {
        &self.inventory
    }

    fn contents_mut(&mut self) -> &mut Contents {
        &mut self.inventory
    }

    fn can_take(&self, _thing: &Thing) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_changes_narrate_damage_only() {
        let mut player = Player::new(RoomId(0), 10);
        let before = player.snapshot();
        assert_eq!(player.state_changes(&before), None);

        player.take_damage(3);
        assert_eq!(
            player.state_changes(&before).as_deref(),
            Some("You take 3 hit points of damage. You're down to 7.")
        );
    }

    #[test]
    fn lethal_damage_narration() {
        let mut player = Player::new(RoomId(0), 2);
        let before = player.snapshot();
        player.take_damage(5);
        assert_eq!(
            player.state_changes(&before).as_deref(),
            Some("You take 5 hit points of damage. You feel consciousness slipping away.")
        );
        assert!(!player.alive());
    }
}
