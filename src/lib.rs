//! Arrow Escape - An arrow-sliding puzzle
//!
//! Tap a block and it slides off the board in the direction its arrow points,
//! unless another block is in the way. Clear every block to win.
//!
//! Core modules:
//! - `sim`: Deterministic generation and board rules (RNG, exit checks, play)
//! - `level`: Serializable level descriptor handed to UIs
//! - `settings`: Data-driven generator tuning
//! - `survey`: Difficulty statistics over many generated boards
//! - `platform`: Browser bridge (wasm32 only)

pub mod error;
pub mod level;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod survey;

pub use error::{ArrowError, Result};
pub use level::LevelSchema;
pub use settings::GeneratorSettings;
pub use sim::{
    Board, Difficulty, Direction, LevelConfig, LevelGenerator, PlaySession, Pos,
    generate_level, generate_level_blocking,
};

/// Game configuration constants
pub mod consts {
    /// Board edge length used by the shipped game (6x6)
    pub const GRID_SIZE: usize = 6;

    /// Cells always left empty so a board never saturates
    pub const SATURATION_MARGIN: usize = 3;

    /// Level number after which block counts stop growing
    pub const PROGRESSION_CAP: u32 = 200;

    /// Candidates are drawn from this many entries at the front of the pool
    pub const CANDIDATE_WINDOW: usize = 15;

    /// Placement attempts allowed per targeted block
    pub const ATTEMPTS_PER_BLOCK: u32 = 40;

    /// Seed multipliers
    pub const LEVEL_SEED_STRIDE: i64 = 9973;
    pub const MODIFIER_SEED_STRIDE: i64 = 777;
}
