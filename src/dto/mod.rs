pub mod common;
pub mod game;
pub mod health;
pub mod matches;
pub mod player;
pub mod team;
pub mod validation;
pub mod week;
