//! Blockfall: a falling-piece game built around a deterministic,
//! host-driven simulation engine.
//!
//! The [`core`] module is pure and owns all game rules; [`term`] and
//! [`input`] are the terminal host built on top of it; [`scores`] persists
//! the leaderboard between sessions.

pub mod core;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;
