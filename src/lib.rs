//! Skyguard - air-defense arcade game and Phong lighting demo
//!
//! The binary picks one of the two demos from config or its first argument.
//! This library holds the application layer shared by `main` and the
//! integration tests.

pub mod config;
pub mod input;
pub mod systems;
