//! Single-screen platformer.
//!
//! Core modules:
//! - `entities`: plain game data (player, platforms, enemies, collectibles)
//! - `collision`: rectangle collision resolution and pickups
//! - `compute`: per-frame simulation step and win/lose state machine
//! - `consts`: compile-time tuning
//!
//! Nothing in the library touches the terminal; the binary owns input and
//! drawing.

pub mod collision;
pub mod compute;
pub mod consts;
pub mod entities;
pub mod error;

pub use error::GameError;
