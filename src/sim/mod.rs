//! Deterministic simulation module
//!
//! All puzzle logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, one instance per generation call
//! - Stable iteration order (row-major)
//! - No rendering or platform dependencies

pub mod exit;
pub mod generator;
pub mod play;
pub mod rng;
pub mod state;

pub use exit::{PathPreview, can_exit, exitable_blocks, trace_path};
pub use generator::{
    LevelConfig, LevelGenerator, Placement, derive_seed, generate_level, generate_level_blocking,
    target_block_count,
};
pub use play::{PlaySession, SessionStatus, TapOutcome};
pub use rng::ParkMiller;
pub use state::{Board, Difficulty, Direction, Pos};
