//! Fluent construction of things and their behavior tables.

use super::behavior::{
    ApplyAttackFn, AttackOutcome, Behavior, Describe, EatFn, EatOutcome, Hook,
};
use super::{Thing, World};
use crate::action::{
    Action, AttackAction, DropAction, EatAction, GoAction, LookAction, PlayerAttackAction,
    SayAction, TakeAction, TurnAction,
};
use crate::attack::Attack;

enum DescribeSpec {
    Default,
    Text(String),
    With(Box<dyn Fn(&Thing, &World) -> String>),
    AliveDead {
        alive: Option<String>,
        dead: Option<String>,
    },
}

/// Builder for [`Thing`]s.
///
/// Every setter has a reasonable default: an anonymous piece of furniture
/// described by its own name, inedible, useless as a weapon, unreactive.
/// One-off personalities override exactly the entries they need.
pub struct ThingBuilder {
    name: String,
    hit_points: i32,
    monster: bool,
    portable: Option<bool>,
    describe: DescribeSpec,
    eat: Option<EatFn>,
    attack: Option<Box<dyn Fn(&Thing, &World) -> Attack>>,
    apply_attack: Option<ApplyAttackFn>,
    on_turn: Option<Hook<TurnAction>>,
    on_enter: Option<Hook<GoAction>>,
    on_take: Option<Hook<TakeAction>>,
    on_drop: Option<Hook<DropAction>>,
    on_look: Option<Hook<LookAction>>,
    on_eat: Option<Hook<EatAction>>,
    on_say: Option<Hook<SayAction>>,
    on_attack: Option<Hook<AttackAction>>,
    on_player_attack: Option<Hook<PlayerAttackAction>>,
}

impl ThingBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hit_points: 0,
            monster: false,
            portable: None,
            describe: DescribeSpec::Default,
            eat: None,
            attack: None,
            apply_attack: None,
            on_turn: None,
            on_enter: None,
            on_take: None,
            on_drop: None,
            on_look: None,
            on_eat: None,
            on_say: None,
            on_attack: None,
            on_player_attack: None,
        }
    }

    /// Marks the thing as a monster with the given starting hit points.
    /// Monsters default to not portable.
    pub fn monster(mut self, hit_points: i32) -> Self {
        self.monster = true;
        self.hit_points = hit_points;
        self
    }

    pub fn portable(mut self, portable: bool) -> Self {
        self.portable = Some(portable);
        self
    }

    /// Fixed description text. Replaces any earlier describe setting; a
    /// thing has either fixed text or a description function, never both.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.describe = DescribeSpec::Text(description.into());
        self
    }

    /// Computed description. Replaces any earlier describe setting.
    pub fn describe_with(mut self, f: impl Fn(&Thing, &World) -> String + 'static) -> Self {
        self.describe = DescribeSpec::With(Box::new(f));
        self
    }

    /// Description used while the thing is alive.
    pub fn describe_alive(mut self, description: impl Into<String>) -> Self {
        self.describe = match self.describe {
            DescribeSpec::AliveDead { dead, .. } => DescribeSpec::AliveDead {
                alive: Some(description.into()),
                dead,
            },
            _ => DescribeSpec::AliveDead {
                alive: Some(description.into()),
                dead: None,
            },
        };
        self
    }

    /// Description used once the thing is dead.
    pub fn describe_dead(mut self, description: impl Into<String>) -> Self {
        self.describe = match self.describe {
            DescribeSpec::AliveDead { alive, .. } => DescribeSpec::AliveDead {
                alive,
                dead: Some(description.into()),
            },
            _ => DescribeSpec::AliveDead {
                alive: None,
                dead: Some(description.into()),
            },
        };
        self
    }

    /// Makes the thing edible: eating it consumes it with this narration.
    pub fn edible(mut self, narration: impl Into<String>) -> Self {
        let narration = narration.into();
        self.eat = Some(Box::new(move |_, _| EatOutcome {
            narration: narration.clone(),
            consumed: true,
        }));
        self
    }

    /// Inedible, but with a custom refusal line.
    pub fn inedible(mut self, narration: impl Into<String>) -> Self {
        let narration = narration.into();
        self.eat = Some(Box::new(move |_, _| EatOutcome {
            narration: narration.clone(),
            consumed: false,
        }));
        self
    }

    /// Full control over the eat outcome.
    pub fn eat_with(mut self, f: impl Fn(&Thing, &World) -> EatOutcome + 'static) -> Self {
        self.eat = Some(Box::new(f));
        self
    }

    /// The attack this thing delivers when used as a weapon.
    pub fn attack(mut self, attack: Attack) -> Self {
        self.attack = Some(Box::new(move |_, _| attack.clone()));
        self
    }

    pub fn attack_with(mut self, f: impl Fn(&Thing, &World) -> Attack + 'static) -> Self {
        self.attack = Some(Box::new(f));
        self
    }

    /// Overrides what happens when this thing is the target of an attack.
    pub fn apply_attack_with(
        mut self,
        f: impl Fn(&Thing, &World, &Attack) -> AttackOutcome + 'static,
    ) -> Self {
        self.apply_attack = Some(Box::new(f));
        self
    }

    pub fn on_turn(
        mut self,
        f: impl Fn(&Thing, &World, &TurnAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_turn = Some(Box::new(f));
        self
    }

    pub fn on_enter(
        mut self,
        f: impl Fn(&Thing, &World, &GoAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    pub fn on_take(
        mut self,
        f: impl Fn(&Thing, &World, &TakeAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_take = Some(Box::new(f));
        self
    }

    pub fn on_drop(
        mut self,
        f: impl Fn(&Thing, &World, &DropAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }

    pub fn on_look(
        mut self,
        f: impl Fn(&Thing, &World, &LookAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_look = Some(Box::new(f));
        self
    }

    pub fn on_eat(
        mut self,
        f: impl Fn(&Thing, &World, &EatAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_eat = Some(Box::new(f));
        self
    }

    pub fn on_say(
        mut self,
        f: impl Fn(&Thing, &World, &SayAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_say = Some(Box::new(f));
        self
    }

    pub fn on_attack(
        mut self,
        f: impl Fn(&Thing, &World, &AttackAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_attack = Some(Box::new(f));
        self
    }

    pub fn on_player_attack(
        mut self,
        f: impl Fn(&Thing, &World, &PlayerAttackAction) -> Vec<Action> + 'static,
    ) -> Self {
        self.on_player_attack = Some(Box::new(f));
        self
    }

    /// Assembles the thing. Unset entries fall back to the baseline table.
    pub fn build(self) -> Thing {
        let portable = self.portable.unwrap_or(!self.monster);

        let describe = match self.describe {
            DescribeSpec::Text(text) => Describe::Text(text),
            DescribeSpec::With(f) => Describe::With(f),
            DescribeSpec::AliveDead { alive, dead } => {
                let fallback = self.name.clone();
                let alive = alive.unwrap_or_else(|| fallback.clone());
                let dead = dead.unwrap_or_else(|| fallback.clone());
                Describe::With(Box::new(move |thing, _| {
                    if thing.alive() {
                        alive.clone()
                    } else {
                        dead.clone()
                    }
                }))
            }
            DescribeSpec::Default => Describe::Text(self.name.clone()),
        };

        let mut behavior = Behavior::baseline(String::new());
        behavior.describe = describe;
        if let Some(eat) = self.eat {
            behavior.eat = eat;
        }
        if let Some(attack) = self.attack {
            behavior.attack = attack;
        }
        if let Some(apply_attack) = self.apply_attack {
            behavior.apply_attack = apply_attack;
        }
        if let Some(hook) = self.on_turn {
            behavior.on_turn = hook;
        }
        if let Some(hook) = self.on_enter {
            behavior.on_enter = hook;
        }
        if let Some(hook) = self.on_take {
            behavior.on_take = hook;
        }
        if let Some(hook) = self.on_drop {
            behavior.on_drop = hook;
        }
        if let Some(hook) = self.on_look {
            behavior.on_look = hook;
        }
        if let Some(hook) = self.on_eat {
            behavior.on_eat = hook;
        }
        if let Some(hook) = self.on_say {
            behavior.on_say = hook;
        }
        if let Some(hook) = self.on_attack {
            behavior.on_attack = hook;
        }
        if let Some(hook) = self.on_player_attack {
            behavior.on_player_attack = hook;
        }

        Thing::new(self.name, portable, self.monster, self.hit_points, behavior)
    }
}
