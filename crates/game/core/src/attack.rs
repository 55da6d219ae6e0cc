//! Combat-outcome values.
//!
//! An [`Attack`] describes what happens when a thing is used as a weapon: a
//! line of narration plus a damage amount. The set of strategies is closed;
//! per-entity variation lives in the behavior table that produces the value,
//! not in the value itself.

use std::fmt;
use std::sync::Arc;

/// Computes the target-dependent suffix of a [`Attack::Full`] narration.
///
/// The argument is the victim's self-designation: "you" for the player,
/// "the GOBLIN" for a thing.
pub type EffectFn = Arc<dyn Fn(&str) -> String>;

/// A combat outcome: narration plus damage.
#[derive(Clone)]
pub enum Attack {
    /// Fixed damage with a fixed line of narration.
    Simple { description: String, damage: i32 },

    /// Fixed damage whose narration ends with a computed, target-dependent
    /// effect ("... blasting you to smithereens.").
    Full {
        description: String,
        damage: i32,
        effect: EffectFn,
    },

    /// No damage; the narration communicates futility.
    Useless { description: String },

    /// No damage, no text.
    Empty,
}

impl Attack {
    pub fn simple(description: impl Into<String>, damage: i32) -> Self {
        Self::Simple {
            description: description.into(),
            damage,
        }
    }

    pub fn full(
        description: impl Into<String>,
        damage: i32,
        effect: impl Fn(&str) -> String + 'static,
    ) -> Self {
        Self::Full {
            description: description.into(),
            damage,
            effect: Arc::new(effect),
        }
    }

    pub fn useless(description: impl Into<String>) -> Self {
        Self::Useless {
            description: description.into(),
        }
    }

    /// Damage dealt when this attack lands.
    pub fn damage(&self) -> i32 {
        match self {
            Attack::Simple { damage, .. } | Attack::Full { damage, .. } => *damage,
            Attack::Useless { .. } | Attack::Empty => 0,
        }
    }

    /// Full narration against `target` (the victim's self-designation).
    pub fn description(&self, target: &str) -> String {
        match self {
            Attack::Simple { description, .. } | Attack::Useless { description } => {
                description.clone()
            }
            Attack::Full {
                description,
                effect,
                ..
            } => format!("{description}{}", effect(target)),
            Attack::Empty => String::new(),
        }
    }
}

impl fmt::Debug for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attack::Simple {
                description,
                damage,
            } => f
                .debug_struct("Simple")
                .field("description", description)
                .field("damage", damage)
                .finish(),
            Attack::Full {
                description,
                damage,
                ..
            } => f
                .debug_struct("Full")
                .field("description", description)
                .field("damage", damage)
                .finish_non_exhaustive(),
            Attack::Useless { description } => f
                .debug_struct("Useless")
                .field("description", description)
                .finish(),
            Attack::Empty => f.write_str("Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_attack_damage_and_text() {
        let attack = Attack::simple("You swing your axe and connect!", 2);
        assert_eq!(attack.damage(), 2);
        assert_eq!(attack.description("the GOBLIN"), "You swing your axe and connect!");
    }

    #[test]
    fn full_attack_appends_target_effect() {
        let attack = Attack::full("A sphere of light emanates from the ring", 1000, |who| {
            format!(" blasting {who} to smithereens.")
        });
        assert_eq!(
            attack.description("you"),
            "A sphere of light emanates from the ring blasting you to smithereens."
        );
        assert_eq!(attack.damage(), 1000);
    }

    #[test]
    fn useless_and_empty_deal_nothing() {
        assert_eq!(Attack::useless("a twig is not an effective weapon.").damage(), 0);
        assert_eq!(Attack::Empty.damage(), 0);
        assert_eq!(Attack::Empty.description("you"), "");
    }
}
