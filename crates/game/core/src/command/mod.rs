//! Command parsing: raw tokens in, validated [`Action`] or narration out.
//!
//! The verb table is the only place raw player text meets the world. Each
//! verb hands off to its parse chain in [`verbs`]; an unknown verb returns
//! `None` so the caller can narrate it (or handle shell-level verbs like
//! QUIT before ever calling in here).

mod parse;
mod verbs;

pub use parse::{Parse, ParseExt, TokenExt, arg};

use crate::action::Action;
use crate::state::World;

/// Parses a tokenized command against the current world.
///
/// `Some(Ok(_))` is a validated action ready for dispatch, `Some(Err(_))`
/// the message for the first problem found, `None` an unknown verb.
pub fn parse(world: &World, tokens: &[String]) -> Option<Parse<Action>> {
    let verb = tokens.first()?;
    let parsed = match verb.to_ascii_uppercase().as_str() {
        "GO" => verbs::go(world, tokens),
        "TAKE" => verbs::take(world, tokens),
        "DROP" => verbs::drop(world, tokens),
        "LOOK" => verbs::look(world, tokens),
        "INVENTORY" | "I" => verbs::inventory(world, tokens),
        "EAT" => verbs::eat(world, tokens),
        "ATTACK" => verbs::attack(world, tokens),
        "SAY" => verbs::say(world, tokens),
        _ => return None,
    };
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Direction, Place, ThingBuilder};

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn small_world() -> World {
        let mut world = World::new();
        let cell = world.add_room("a bare cell");
        let cave = world.add_room("a damp cave");
        world
            .connect(cell, "iron door", cave, Direction::East)
            .unwrap();
        world.spawn_player(cell, 10);

        let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
        world.place_thing(rock, Place::Room(cell), "on the floor");
        world
    }

    #[test]
    fn unknown_verb_is_none() {
        let world = small_world();
        assert!(parse(&world, &tokens("DANCE WILDLY")).is_none());
        assert!(parse(&world, &tokens("")).is_none());
    }

    #[test]
    fn go_validates_direction_then_door() {
        let world = small_world();
        assert!(matches!(
            parse(&world, &tokens("GO EAST")),
            Some(Ok(Action::Go(_)))
        ));
        assert!(matches!(
            parse(&world, &tokens("GO")),
            Some(Err(ref msg)) if msg == "Go where?"
        ));
        assert!(matches!(
            parse(&world, &tokens("GO SIDEWAYS")),
            Some(Err(ref msg)) if msg == "Don't understand direction SIDEWAYS."
        ));
        assert!(matches!(
            parse(&world, &tokens("GO WEST")),
            Some(Err(ref msg)) if msg == "No door to the west."
        ));
    }

    #[test]
    fn take_resolves_each_named_thing() {
        let world = small_world();
        assert!(matches!(
            parse(&world, &tokens("TAKE ROCK")),
            Some(Ok(Action::Take(_)))
        ));
        assert!(matches!(
            parse(&world, &tokens("TAKE")),
            Some(Err(ref msg)) if msg == "Take what?"
        ));
        assert!(matches!(
            parse(&world, &tokens("TAKE ROCK AND CHICKEN")),
            Some(Err(ref msg)) if msg == "No CHICKEN here to take."
        ));
    }

    #[test]
    fn drop_looks_only_in_inventory() {
        let world = small_world();
        assert!(matches!(
            parse(&world, &tokens("DROP ROCK")),
            Some(Err(ref msg)) if msg == "No ROCK to drop!"
        ));
    }

    #[test]
    fn attack_reports_grammar_before_resolution() {
        let world = small_world();
        assert!(matches!(
            parse(&world, &tokens("ATTACK ROCK ROCK")),
            Some(Err(ref msg)) if msg == "Don't understand ATTACK with no WITH."
        ));
        // WITH is fine, weapon fails before the missing target is reported.
        assert!(matches!(
            parse(&world, &tokens("ATTACK GHOST WITH BANANA")),
            Some(Err(ref msg)) if msg == "No BANANA here to attack with!"
        ));
        assert!(matches!(
            parse(&world, &tokens("ATTACK GHOST WITH ROCK")),
            Some(Err(ref msg)) if msg == "No GHOST here to attack."
        ));
    }

    #[test]
    fn attack_with_implicit_target_needs_one_living_monster() {
        let mut world = small_world();
        assert!(matches!(
            parse(&world, &tokens("ATTACK WITH ROCK")),
            Some(Err(ref msg)) if msg == "No WITH here to attack."
        ));

        let player_room = world.player().room();
        let troll = world.add_thing(ThingBuilder::new("troll").monster(5).build());
        world.place_thing(troll, Place::Room(player_room), "in the corner");
        assert!(matches!(
            parse(&world, &tokens("ATTACK WITH ROCK")),
            Some(Ok(Action::Attack(a))) if a.target == troll
        ));
    }

    #[test]
    fn say_joins_the_rest_of_the_line() {
        let world = small_world();
        assert!(matches!(
            parse(&world, &tokens("SAY HELLO THERE")),
            Some(Ok(Action::Say(ref a))) if a.text == "HELLO THERE"
        ));
        assert!(matches!(
            parse(&world, &tokens("SAY")),
            Some(Err(ref msg)) if msg == "Say what?"
        ));
    }
}
