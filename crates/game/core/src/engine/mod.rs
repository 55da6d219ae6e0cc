//! Action dispatch and the reactive cascade.
//!
//! The [`Engine`] is the single writer of the world during play. Dispatching
//! an action applies its direct effect, then asks every entity with standing
//! to react; each follow-up action is resolved depth-first before the next
//! sibling, so a monster's greeting lands before its attack when both come
//! out of the same hook call.
//!
//! Hooks are contracted to be pure functions of the action they observe and
//! to emit finite, non-cycling follow-ups. The depth guard turns that
//! convention into a hard bound: a runaway cascade is cut off with a warning
//! instead of overflowing the stack.

use crate::action::{Action, ActionTransition};
use crate::config::GameConfig;
use crate::state::World;

/// Applies actions to a mutably borrowed world.
pub struct Engine<'a> {
    world: &'a mut World,
    config: &'a GameConfig,
}

impl<'a> Engine<'a> {
    pub fn new(world: &'a mut World, config: &'a GameConfig) -> Self {
        Self { world, config }
    }

    /// Runs one full player turn: the validated action, its cascade, the
    /// ambient turn action (monsters act), and the player-state diff.
    /// Returns the joined narrative block for the turn.
    pub fn perform(&mut self, action: Action) -> String {
        let before = self.world.player().snapshot();

        let mut narration = Vec::new();
        self.dispatch(&action, &mut narration, 0);
        self.dispatch(&Action::turn(), &mut narration, 0);

        // Post-hoc diff, not an action: it must never re-enter dispatch.
        if let Some(line) = self.world.player().state_changes(&before) {
            narration.push(line);
        }

        narration.retain(|line| !line.is_empty());
        narration.join(" ")
    }

    /// Dispatches one action: direct effect, then the reactive cascade,
    /// depth-first.
    fn dispatch(&mut self, action: &Action, narration: &mut Vec<String>, depth: usize) {
        if depth >= self.config.max_cascade_depth {
            tracing::warn!(
                action = action.as_snake_case(),
                depth,
                "reactive cascade exceeded depth limit; dropping follow-ups"
            );
            return;
        }

        tracing::debug!(action = action.as_snake_case(), depth, "dispatch");
        if let Some(line) = action.apply(self.world) {
            narration.push(line);
        }

        for follow_up in action.reactions(self.world) {
            self.dispatch(&follow_up, narration, depth + 1);
        }
    }
}
