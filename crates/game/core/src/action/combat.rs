use super::{Action, ActionTransition, react_in_room};
use crate::attack::Attack;
use crate::state::{ThingId, World};

/// The player's validated `ATTACK <target> WITH <weapon>`.
///
/// Resolution: the weapon's behavior table yields an [`Attack`] value; zero
/// damage is narrated as ineffective without touching the target; otherwise
/// the target's `apply_attack` computes the outcome (damage, wounded/dead
/// narration, destruction) and this action applies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub target: ThingId,
    pub weapon: ThingId,
}

impl AttackAction {
    pub fn new(target: ThingId, weapon: ThingId) -> Self {
        Self { target, weapon }
    }
}

impl ActionTransition for AttackAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        let target_name = format!("the {}", world.thing(self.target).name());

        let attack = {
            let w: &World = world;
            w.thing(self.weapon).attack(w)
        };

        // The zero-damage shortcut applies to monsters only; innocent
        // targets reject every weapon through their `apply_attack`.
        if world.thing(self.target).is_monster() && attack.damage() == 0 {
            let lead = attack.description(&target_name);
            return Some(if lead.is_empty() {
                "You do zero damage.".to_string()
            } else {
                format!("{lead} You do zero damage.")
            });
        }

        let outcome = {
            let w: &World = world;
            w.thing(self.target).attack_outcome(w, &attack)
        };
        world.thing_mut(self.target).take_damage(outcome.damage);
        if outcome.destroyed {
            world.remove_thing(self.target);
        }

        let lead = attack.description(&target_name);
        Some(if lead.is_empty() {
            outcome.narration
        } else {
            format!("{lead} {}", outcome.narration)
        })
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_attack)
    }
}

/// An attack on the player, emitted by monster hooks.
///
/// Damage lands on the player's hit points silently; the "You take N hit
/// points" line comes from the end-of-turn state diff, not from here.
#[derive(Clone, Debug)]
pub struct PlayerAttackAction {
    pub attacker: ThingId,
    pub attack: Attack,
}

impl PlayerAttackAction {
    pub fn new(attacker: ThingId, attack: Attack) -> Self {
        Self { attacker, attack }
    }
}

impl ActionTransition for PlayerAttackAction {
    fn apply(&self, world: &mut World) -> Option<String> {
        world.player_mut().take_damage(self.attack.damage());
        let text = self.attack.description("you");
        (!text.is_empty()).then_some(text)
    }

    fn reactions(&self, world: &World) -> Vec<Action> {
        react_in_room(world, self, |b| &b.on_player_attack)
    }
}
