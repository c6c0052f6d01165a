//! Pokémon name quiz: fetches random creature records from the PokeAPI,
//! picks one as the correct answer, and judges multiple-choice guesses in
//! either of two display languages.

pub mod config;
pub mod lang;
pub mod pokeapi;
pub mod quiz;
pub mod round;
