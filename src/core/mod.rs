//! Core simulation: grid, shapes, randomizer, scoring and the engine that
//! ties them together. No I/O and no timers live here; the host drives the
//! engine with elapsed time and player intents.

pub mod board;
pub mod config;
pub mod engine;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use board::{Board, MAX_BOARD_DIM};
pub use config::EngineConfig;
pub use engine::{ActivePiece, Engine};
pub use rng::{Randomizer, RandomizerPolicy, SimpleRng};
pub use shape::{Shape, MAX_SHAPE_DIM};
