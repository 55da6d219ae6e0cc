//! The standard adventure content: rooms, doors, furniture, weapons, food,
//! and the monsters that make trouble. Built entirely against `game-core`'s
//! builder API; the engine knows nothing about any of it.
pub mod maze;
