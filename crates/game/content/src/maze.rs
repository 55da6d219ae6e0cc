//! The castle maze and its inhabitants.
//!
//! Everything here is data: rooms, doors, and things assembled through
//! `ThingBuilder`. The personalities (a pirate who guards his parrot, a
//! blobbyblob that leaves an edible corpse, a painting that opens a hidden
//! passage) are single-entry overrides on otherwise-baseline behavior
//! tables.

use game_core::state::default_apply_attack;
use game_core::{
    Action, Attack, Direction, EatOutcome, GameConfig, Place, Speaker, ThingBuilder, World,
    WorldError,
};

/// Builds the standard world and puts the player at the entry.
pub fn build(config: &GameConfig) -> Result<World, WorldError> {
    let mut world = World::new();

    // Rooms
    let entry = world.add_room("a dusty entryway to a castle");
    let kitchen = world.add_room("what appears to be a kitchen");
    let lair = world.add_room("the lair of a horrible creature");
    let dining =
        world.add_room("a grand dining room with a crystal chandelier and tapestries on the walls");
    let storeroom = world.add_room("a storeroom");
    let hall = world.add_room("a long hallway");
    // Only reachable once the painting in the hall is opened.
    let throne_room = world.add_room("a massive throneroom");

    // Doors. Each edge is registered in both directions; nothing implies
    // the return trip.
    world.connect(entry, "oaken door", kitchen, Direction::East)?;
    world.connect(kitchen, "oaken door", entry, Direction::West)?;
    world.connect(entry, "dank tunnel", lair, Direction::South)?;
    world.connect(lair, "dank tunnel", entry, Direction::North)?;
    world.connect(kitchen, "swinging door", dining, Direction::East)?;
    world.connect(dining, "swinging door", kitchen, Direction::West)?;
    world.connect(kitchen, "wooden door", storeroom, Direction::South)?;
    world.connect(storeroom, "wooden door", kitchen, Direction::North)?;
    world.connect(dining, "golden archway", hall, Direction::North)?;
    world.connect(hall, "golden archway", dining, Direction::South)?;

    // Furniture
    let pedestal = world.add_thing(
        ThingBuilder::new("pedestal")
            .description("stone pedestal")
            .portable(false)
            .build(),
    );
    let table = world.add_thing(
        ThingBuilder::new("table")
            .description("wooden table")
            .portable(false)
            .build(),
    );
    let tray = world.add_thing(
        ThingBuilder::new("tray")
            .description("TV tray")
            .portable(false)
            .build(),
    );
    let chest = world.add_thing(
        ThingBuilder::new("chest")
            .description("wooden treasure chest")
            .portable(false)
            .build(),
    );
    // The magic word the pirate hints at. Saying it in the hall opens the
    // passage behind the painting; both directed edges are revealed so the
    // player can come back.
    let painting = world.add_thing(
        ThingBuilder::new("painting")
            .portable(false)
            .describe_with(move |_, world| {
                let door = if world.room(hall).door(Direction::North).is_some() {
                    "an open door"
                } else {
                    "a shut door"
                };
                format!(
                    "painting of a famous artist in their bedroom, \
                     {door} visable at the back of the room"
                )
            })
            .on_say(move |_, _, say| {
                if matches!(say.speaker, Speaker::Player)
                    && say.text.to_uppercase().contains("FROBNICATE")
                {
                    vec![
                        Action::reveal(
                            hall,
                            Direction::North,
                            "small hole in the painting",
                            throne_room,
                            Some(
                                "The door in the painting opens, behind which you \
                                 can see a throne. It almost looks real."
                                    .to_string(),
                            ),
                        ),
                        Action::reveal(
                            throne_room,
                            Direction::South,
                            "small hole in the painting",
                            hall,
                            None,
                        ),
                    ]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );
    let gnitniap = world.add_thing(
        ThingBuilder::new("painting")
            .description(
                "painting of a living room with an open door at the back \
                 leading to what looks to be a bedroom",
            )
            .portable(false)
            .build(),
    );
    let throne = world.add_thing(
        ThingBuilder::new("throne")
            .description(
                "massive throne with ornate carvings intricately drawn \
                 into its golden crest",
            )
            .portable(false)
            .on_say(move |thing, _, say| {
                if matches!(say.speaker, Speaker::Player)
                    && say.text.to_uppercase().contains("FROBNICATE")
                {
                    vec![Action::move_thing(
                        thing.id(),
                        Place::Room(throne_room),
                        "at the back of the room",
                        Some("The throne grinds across the floor to the back of the room."
                            .to_string()),
                    )]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );

    // Weapons
    let ring = world.add_thing(
        ThingBuilder::new("ring")
            .description("ring of great power")
            .attack(Attack::full(
                "A sphere of light emanates from the ring",
                1000,
                |who| format!(" blasting {who} to smithereens."),
            ))
            .build(),
    );
    let axe = world.add_thing(
        ThingBuilder::new("axe")
            .description("heavy dwarven axe")
            .attack(Attack::simple("You swing your axe and connect!", 2))
            .inedible(
                "Axes are not good for eating. Now your teeth hurt and you are no less hungry.",
            )
            .build(),
    );
    let sword = world.add_thing(
        ThingBuilder::new("sword")
            .description("broadsword with a rusty iron hilt")
            .attack(Attack::simple(
                "Oof, this sword is heavy but you manage to swing it.",
                5,
            ))
            .inedible("What are you, a sword swallower?! You can't eat a sword.")
            .build(),
    );
    let dagger = world.add_thing(
        ThingBuilder::new("dagger")
            .description("jeweled dagger")
            .attack(Attack::simple("Stabby, stab, stab.", 1))
            .build(),
    );

    // Food
    let bread = world.add_thing(
        ThingBuilder::new("bread")
            .description("loaf of bread")
            .edible("Ah, delicious. Could use some mayonnaise though.")
            .build(),
    );
    let sandwich = world.add_thing(
        ThingBuilder::new("sandwich")
            .description("ham and cheese sandwich")
            .edible("Mmmm, tasty. But I think you got a spot of mustard on your tunic.")
            .build(),
    );

    // Monsters
    let blobbyblob = world.add_thing(
        ThingBuilder::new("blobbyblob")
            .monster(7)
            .describe_with(|thing, _| {
                if thing.alive() {
                    "blobbyblob, a gelatenous mass with too many eyes \
                     and an odor of jello casserole gone bad"
                        .to_string()
                } else {
                    "dead blobbyblob decaying into puddle of goo".to_string()
                }
            })
            .attack(Attack::simple(
                "The blobbyblob extrudes a blobby arm and smashes at you!",
                3,
            ))
            .on_turn(|thing, world, _| {
                if thing.alive() {
                    vec![Action::player_attack(thing.id(), thing.attack(world))]
                } else {
                    Vec::new()
                }
            })
            // Its corpse stays in the room, and can be eaten.
            .apply_attack_with(|thing, world, attack| {
                let mut outcome = default_apply_attack(thing, world, attack);
                outcome.destroyed = false;
                outcome
            })
            // The killing blow spatters it out of its corner.
            .on_attack(|thing, _, attack| {
                match thing.location() {
                    Some(place) if attack.target == thing.id() && !thing.alive() => {
                        vec![Action::move_thing(thing.id(), place, "around the room", None)]
                    }
                    _ => Vec::new(),
                }
            })
            .eat_with(|thing, _| {
                if thing.alive() {
                    EatOutcome {
                        narration: format!(
                            "Are you out of your mind?! This is a live and jiggling {}.",
                            thing.name()
                        ),
                        consumed: false,
                    }
                } else {
                    EatOutcome {
                        narration: "Ugh. This is worse than the worst jello casserole \
                                    you have ever tasted. But it does slightly sate your hunger."
                            .to_string(),
                        consumed: true,
                    }
                }
            })
            .build(),
    );

    let parrot = world.add_thing(
        ThingBuilder::new("parrot")
            .monster(5)
            .portable(true)
            .describe_alive("green and blue parrot with a tiny eye patch")
            .describe_dead("dead parrot")
            .on_drop(|thing, world, drop| {
                if world.thing(drop.thing).name() == "BREAD" {
                    vec![Action::move_thing(
                        thing.id(),
                        Place::Thing(drop.thing),
                        "on",
                        Some("The PARROT flies down and starts eating the bread.".to_string()),
                    )]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );

    let pirate = world.add_thing(
        ThingBuilder::new("pirate")
            .monster(10)
            .describe_alive("pirate with a wooden leg and an eye patch")
            .describe_dead("dead pirate with his eye patch askew")
            .on_enter(|thing, _, _| {
                if thing.alive() {
                    vec![Action::say(Speaker::Thing(thing.id()), "Arr, matey!")]
                } else {
                    Vec::new()
                }
            })
            .on_take(move |thing, _, take| {
                if thing.alive() && take.taking(parrot) {
                    vec![Action::say(
                        Speaker::Thing(thing.id()),
                        "Oi, ye swarthy dog! Hands off me parrot!",
                    )]
                } else {
                    Vec::new()
                }
            })
            .on_say(|thing, _, say| {
                if thing.alive()
                    && matches!(say.speaker, Speaker::Player)
                    && say.text.to_uppercase().contains("MAGIC WORD")
                {
                    vec![Action::say(
                        Speaker::Thing(thing.id()),
                        "Arr, the magic word be 'Frobnicate'!",
                    )]
                } else {
                    Vec::new()
                }
            })
            .build(),
    );

    // Placement
    world.place_thing(pedestal, Place::Room(entry), "in the center of the room");
    world.place_thing(ring, Place::Thing(pedestal), "on");
    world.place_thing(tray, Place::Room(entry), "by the door");
    world.place_thing(sandwich, Place::Thing(tray), "on");
    world.place_thing(table, Place::Room(kitchen), "against the wall");
    world.place_thing(bread, Place::Thing(table), "on");
    world.place_thing(axe, Place::Room(lair), "on the floor");
    world.place_thing(blobbyblob, Place::Room(lair), "across from you");
    world.place_thing(chest, Place::Room(storeroom), "against the wall");
    world.place_thing(dagger, Place::Thing(chest), "inside");
    world.place_thing(sword, Place::Room(dining), "propped against a wall");
    world.place_thing(pirate, Place::Room(dining), "in the middle of the room");
    world.place_thing(parrot, Place::Thing(pirate), "on the right shoulder of");
    world.place_thing(painting, Place::Room(hall), "covering the north wall");
    world.place_thing(gnitniap, Place::Room(throne_room), "on the south wall");
    world.place_thing(throne, Place::Room(throne_room), "in the center of the room");

    world.spawn_player(entry, config.starting_hit_points);
    Ok(world)
}
