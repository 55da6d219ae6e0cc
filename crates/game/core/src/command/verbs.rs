//! One parse chain per verb.
//!
//! Every chain turns a token list plus a read-only world view into a fully
//! validated [`Action`], or into the message for the first thing wrong with
//! the command. Nothing here mutates the world.

use std::str::FromStr;

use super::parse::{Parse, ParseExt, TokenExt, arg};
use crate::action::{Action, Speaker};
use crate::state::{Direction, Place, ThingId, World};

pub fn go(world: &World, tokens: &[String]) -> Parse<Action> {
    arg(tokens, 1, "Go where?")
        .resolve(
            |token| Direction::from_str(token).ok(),
            |token| format!("Don't understand direction {token}."),
        )
        .resolve(
            |&direction| {
                let room = world.player().room();
                world.room(room).door(direction).map(|_| (room, direction))
            },
            |direction| format!("No door to the {direction}."),
        )
        .map(|(room, direction)| Action::go(room, direction))
}

/// `TAKE thing AND other...`: every named thing must resolve in the room;
/// resolved containers bring their contents along.
pub fn take(world: &World, tokens: &[String]) -> Parse<Action> {
    if tokens.len() < 2 {
        return Err("Take what?".to_string());
    }
    let mut things: Vec<ThingId> = Vec::new();
    for token in &tokens[1..] {
        if token.eq_ignore_ascii_case("AND") {
            continue;
        }
        let id = world
            .room_thing(token)
            .ok_or_else(|| format!("No {token} here to take."))?;
        things.push(id);
        things.extend(world.all_things_at(Place::Thing(id)));
    }
    Ok(Action::take(things))
}

pub fn drop(world: &World, tokens: &[String]) -> Parse<Action> {
    arg(tokens, 1, "Drop what?")
        .resolve(
            |token| world.inventory_thing(token),
            |token| format!("No {token} to drop!"),
        )
        .map(Action::drop)
}

pub fn eat(world: &World, tokens: &[String]) -> Parse<Action> {
    arg(tokens, 1, "Eat what?")
        .resolve(
            |token| world.visible_thing(token),
            |token| format!("No {token} here to eat."),
        )
        .map(Action::eat)
}

pub fn look(_world: &World, _tokens: &[String]) -> Parse<Action> {
    Ok(Action::look())
}

pub fn inventory(_world: &World, _tokens: &[String]) -> Parse<Action> {
    Ok(Action::inventory())
}

/// `ATTACK <target> WITH <weapon>`, or `ATTACK WITH <weapon>` when the room
/// has exactly one living monster. Grammar problems are reported in WITH,
/// weapon, target order.
pub fn attack(world: &World, tokens: &[String]) -> Parse<Action> {
    let target = arg(tokens, 1, "Attack what? And with what?").resolve(
        |token| world.implicit_monster(token),
        |token| format!("No {token} here to attack."),
    );
    let no_with = "Don't understand ATTACK with no WITH.";
    let with =
        arg(tokens, tokens.len().saturating_sub(2), no_with).expect_word("WITH", no_with);
    let weapon = arg(tokens, tokens.len() - 1, "Attack with what?").resolve(
        |token| world.visible_thing(token),
        |token| format!("No {token} here to attack with!"),
    );

    with.and_then(|()| weapon.and_then(|weapon| target.map(|target| Action::attack(target, weapon))))
}

pub fn say(_world: &World, tokens: &[String]) -> Parse<Action> {
    if tokens.len() < 2 {
        return Err("Say what?".to_string());
    }
    Ok(Action::say(Speaker::Player, tokens[1..].join(" ")))
}
