//! Terminal front end for the hut-picker game.

pub mod hut_scene;
