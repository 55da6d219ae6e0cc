//! End-to-end turns through the engine: parse, dispatch, cascade, diff.

use game_core::{
    Action, Attack, Direction, Engine, GameConfig, Place, Speaker, ThingBuilder, World, command,
};

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Parses a command that is expected to validate, then runs it.
fn run(world: &mut World, config: &GameConfig, line: &str) -> String {
    let action = command::parse(world, &tokens(line))
        .expect("known verb")
        .expect("command validates");
    Engine::new(world, config).perform(action)
}

fn bare_world() -> (World, GameConfig) {
    let mut world = World::new();
    let config = GameConfig::new();
    let cell = world.add_room("a bare cell");
    world.spawn_player(cell, config.starting_hit_points);
    (world, config)
}

#[test]
fn failed_parse_never_touches_the_world() {
    let (mut world, _config) = bare_world();
    let room = world.player().room();
    let rock = world.add_thing(ThingBuilder::new("rock").build());
    world.place_thing(rock, Place::Room(room), "on the floor");

    let result = command::parse(&world, &tokens("TAKE ROCK AND UNICORN"));
    assert!(matches!(result, Some(Err(ref msg)) if msg == "No UNICORN here to take."));
    // The rock is still on the floor and no turn elapsed.
    assert_eq!(world.thing(rock).location(), Some(Place::Room(room)));
    assert_eq!(world.player().hit_points(), 10);
}

#[test]
fn take_then_drop_round_trip() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
    world.place_thing(rock, Place::Room(room), "on the floor");

    let out = run(&mut world, &config, "TAKE ROCK");
    assert_eq!(out, "You take the ROCK.");
    assert_eq!(world.thing(rock).location(), Some(Place::Player));

    let out = run(&mut world, &config, "INVENTORY");
    assert_eq!(out, "You have a gray rock.");

    let out = run(&mut world, &config, "DROP ROCK");
    assert_eq!(out, "You drop the ROCK.");
    assert_eq!(world.thing(rock).location(), Some(Place::Room(room)));
}

#[test]
fn taking_a_container_brings_its_contents() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let sack = world.add_thing(ThingBuilder::new("sack").build());
    let coin = world.add_thing(ThingBuilder::new("coin").build());
    world.place_thing(sack, Place::Room(room), "on the floor");
    world.place_thing(coin, Place::Thing(sack), "inside");

    let out = run(&mut world, &config, "TAKE SACK");
    assert_eq!(out, "You take the SACK and the COIN.");
    assert_eq!(world.thing(coin).location(), Some(Place::Player));
}

#[test]
fn attack_wounds_then_kills_and_removes() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let troll = world.add_thing(ThingBuilder::new("troll").monster(3).build());
    let axe = world.add_thing(
        ThingBuilder::new("axe")
            .attack(Attack::simple("You swing your axe and connect!", 2))
            .build(),
    );
    world.place_thing(troll, Place::Room(room), "in the corner");
    world.place_thing(axe, Place::Room(room), "on the floor");

    let out = run(&mut world, &config, "ATTACK TROLL WITH AXE");
    assert_eq!(
        out,
        "You swing your axe and connect! After 2 points of damage, \
         the TROLL is wounded but still alive. And now it's mad."
    );
    assert_eq!(world.thing(troll).hit_points(), 1);

    let out = run(&mut world, &config, "ATTACK TROLL WITH AXE");
    assert_eq!(
        out,
        "You swing your axe and connect! After 2 points of damage, \
         the TROLL is dead. Good job, murderer."
    );
    assert!(!world.thing(troll).alive());
    assert_eq!(world.thing(troll).location(), None);
    assert_eq!(world.room_thing("TROLL"), None);
}

#[test]
fn useless_weapon_does_zero_damage() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let troll = world.add_thing(ThingBuilder::new("troll").monster(3).build());
    let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
    world.place_thing(troll, Place::Room(room), "in the corner");
    world.place_thing(rock, Place::Room(room), "on the floor");

    let out = run(&mut world, &config, "ATTACK TROLL WITH ROCK");
    assert_eq!(
        out,
        "a gray rock is not an effective weapon. You do zero damage."
    );
    assert_eq!(world.thing(troll).hit_points(), 3);
}

#[test]
fn innocent_targets_reject_every_weapon() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let table = world.add_thing(
        ThingBuilder::new("table")
            .description("wooden table")
            .portable(false)
            .build(),
    );
    let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
    let axe = world.add_thing(
        ThingBuilder::new("axe")
            .attack(Attack::simple("You swing your axe and connect!", 2))
            .build(),
    );
    world.place_thing(table, Place::Room(room), "against the wall");
    world.place_thing(rock, Place::Room(room), "on the floor");
    world.place_thing(axe, Place::Room(room), "on the floor");

    // Rejection does not depend on whether the weapon deals damage.
    let out = run(&mut world, &config, "ATTACK TABLE WITH ROCK");
    assert_eq!(
        out,
        "a gray rock is not an effective weapon. \
         I don't know why you're attacking an innocent TABLE."
    );
    let out = run(&mut world, &config, "ATTACK TABLE WITH AXE");
    assert_eq!(
        out,
        "You swing your axe and connect! \
         I don't know why you're attacking an innocent TABLE."
    );
    assert_eq!(world.thing(table).location(), Some(Place::Room(room)));
}

#[test]
fn hooks_can_reveal_new_doors() {
    let (mut world, config) = bare_world();
    let cell = world.player().room();
    let vault = world.add_room("a hidden vault");
    let lever = world.add_thing(
        ThingBuilder::new("lever")
            .description("rusty lever")
            .portable(false)
            .on_say(move |_, _, say| {
                if say.text.contains("OPEN") {
                    vec![
                        Action::reveal(
                            cell,
                            Direction::East,
                            "hidden door",
                            vault,
                            Some("A section of the wall swings open.".to_string()),
                        ),
                        Action::reveal(vault, Direction::West, "hidden door", cell, None),
                    ]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );
    world.place_thing(lever, Place::Room(cell), "set into the wall");

    let result = command::parse(&world, &tokens("GO EAST"));
    assert!(matches!(result, Some(Err(ref msg)) if msg == "No door to the east."));

    let out = run(&mut world, &config, "SAY OPEN SESAME");
    assert!(out.contains("A section of the wall swings open."));

    // Saying it again reveals nothing new and narrates nothing extra.
    let out = run(&mut world, &config, "SAY OPEN SESAME");
    assert_eq!(out, "You say, \"OPEN SESAME\"");

    let out = run(&mut world, &config, "GO EAST");
    assert!(out.starts_with("You are in a hidden vault."));
    let out = run(&mut world, &config, "GO WEST");
    assert!(out.starts_with("You are in a bare cell."));
}

#[test]
fn monster_acts_every_turn_until_dead() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let troll = world.add_thing(
        ThingBuilder::new("troll")
            .monster(3)
            .on_turn(|thing, _, _| {
                if thing.alive() {
                    vec![Action::player_attack(
                        thing.id(),
                        Attack::simple("The troll swings at you!", 3),
                    )]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );
    let axe = world.add_thing(
        ThingBuilder::new("axe")
            .attack(Attack::simple("You swing your axe and connect!", 3))
            .build(),
    );
    world.place_thing(troll, Place::Room(room), "in the corner");
    world.place_thing(axe, Place::Room(room), "on the floor");

    let out = run(&mut world, &config, "LOOK");
    // Primary narration first, monster turn after, state diff last.
    assert!(out.starts_with("You are in a bare cell. In the corner is a troll."));
    assert!(out.contains("The troll swings at you!"));
    assert!(out.ends_with("You take 3 hit points of damage. You're down to 7."));

    // The killing blow lands before the monster's turn comes around.
    let out = run(&mut world, &config, "ATTACK TROLL WITH AXE");
    assert!(out.contains("dead. Good job, murderer."));
    assert!(!out.contains("The troll swings at you!"));
    // Dead monsters stop acting; the player's hit points hold steady.
    let hp = world.player().hit_points();
    let out = run(&mut world, &config, "LOOK");
    assert!(!out.contains("The troll swings at you!"));
    assert_eq!(world.player().hit_points(), hp);
}

#[test]
fn look_without_monsters_is_idempotent() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
    world.place_thing(rock, Place::Room(room), "on the floor");

    let first = run(&mut world, &config, "LOOK");
    let second = run(&mut world, &config, "LOOK");
    assert_eq!(first, second);
    assert_eq!(
        first,
        "You are in a bare cell. On the floor is a gray rock."
    );
}

#[test]
fn eating_consumes_only_the_edible() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let bread = world.add_thing(
        ThingBuilder::new("bread")
            .description("loaf of bread")
            .edible("Mmmm, tasty.")
            .build(),
    );
    let rock = world.add_thing(ThingBuilder::new("rock").description("gray rock").build());
    world.place_thing(bread, Place::Room(room), "on the floor");
    world.place_thing(rock, Place::Room(room), "next to it");

    let out = run(&mut world, &config, "EAT BREAD");
    assert_eq!(out, "Mmmm, tasty.");
    assert_eq!(world.thing(bread).location(), None);

    let out = run(&mut world, &config, "EAT ROCK");
    assert_eq!(out, "Yuck. You can't eat a gray rock.");
    assert_eq!(world.thing(rock).location(), Some(Place::Room(room)));
}

#[test]
fn go_moves_the_player_and_fires_enter_hooks() {
    let (mut world, config) = bare_world();
    let cell = world.player().room();
    let cave = world.add_room("a damp cave");
    world
        .connect(cell, "iron door", cave, Direction::East)
        .unwrap();

    let greeter = world.add_thing(
        ThingBuilder::new("hermit")
            .monster(5)
            .on_enter(|thing, _, _| {
                vec![Action::say(Speaker::Thing(thing.id()), "Who goes there?")]
            })
            .build(),
    );
    world.place_thing(greeter, Place::Room(cave), "by the fire");

    let out = run(&mut world, &config, "GO EAST");
    assert_eq!(world.player().room(), cave);
    assert!(out.starts_with("You are in a damp cave."));
    assert!(out.contains("The HERMIT says, \"Who goes there?\""));
}

#[test]
fn one_way_door_does_not_imply_a_return_trip() {
    let (mut world, config) = bare_world();
    let cell = world.player().room();
    let cave = world.add_room("a damp cave");
    world
        .connect(cell, "iron door", cave, Direction::East)
        .unwrap();

    run(&mut world, &config, "GO EAST");
    let result = command::parse(&world, &tokens("GO WEST"));
    assert!(matches!(result, Some(Err(ref msg)) if msg == "No door to the west."));
    assert_eq!(world.player().room(), cave);
}

#[test]
fn follow_ups_from_one_hook_dispatch_in_order() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    let guard = world.add_thing(
        ThingBuilder::new("guard")
            .monster(5)
            .on_say(|thing, _, say| {
                if matches!(say.speaker, Speaker::Player) {
                    vec![
                        Action::say(Speaker::Thing(thing.id()), "Silence!"),
                        Action::player_attack(
                            thing.id(),
                            Attack::simple("The guard strikes you!", 1),
                        ),
                    ]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );
    world.place_thing(guard, Place::Room(room), "at the door");

    let out = run(&mut world, &config, "SAY HELLO");
    let said = out.find("You say, \"HELLO\"").expect("player line");
    let rebuke = out.find("The GUARD says, \"Silence!\"").expect("rebuke");
    let strike = out.find("The guard strikes you!").expect("strike");
    assert!(said < rebuke && rebuke < strike);
}

#[test]
fn runaway_cascade_is_cut_off() {
    let (mut world, config) = bare_world();
    let room = world.player().room();
    // Echoes every say with another say, forever.
    let echo = world.add_thing(
        ThingBuilder::new("echo")
            .on_say(|thing, _, _| vec![Action::say(Speaker::Thing(thing.id()), "echo")])
            .build(),
    );
    world.place_thing(echo, Place::Room(room), "all around");

    let out = run(&mut world, &config, "SAY HELLO");
    let echoes = out.matches("The ECHO says, \"echo\"").count();
    assert!(echoes > 0);
    assert!(echoes <= config.max_cascade_depth);
}
