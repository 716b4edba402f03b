//! Attack of the Orcs - console wargame library
//!
//! This module exposes the game logic for the binaries and for testing.

pub mod build_info;
pub mod combat;
pub mod constants;
pub mod error;
pub mod game;
pub mod goldhunt;
pub mod hutgame;
pub mod patterns;
pub mod records;
pub mod ui;
pub mod units;
