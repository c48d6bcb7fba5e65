//! Reverse constructive level generator
//!
//! Blocks are placed one at a time, and a block is only placed if it can
//! leave the board at that moment. Later blocks may land in an earlier
//! block's path; that dependency is the puzzle. Clearing blocks in reverse
//! placement order always works, so every generated board is solvable.

use serde::{Deserialize, Serialize};

use super::exit::can_exit;
use super::rng::ParkMiller;
use super::state::{Board, Difficulty, Direction, Pos};
use crate::consts::{LEVEL_SEED_STRIDE, MODIFIER_SEED_STRIDE};
use crate::error::Result;
use crate::settings::GeneratorSettings;

/// One block as it was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Pos,
    pub direction: Direction,
}

/// A generated level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Board edge length
    pub size: usize,
    /// The board handed to the UI
    pub grid: Board,
    /// Number of blocks placed. This is the move count of a perfect run, not
    /// the result of a shortest-sequence search.
    pub optimal_moves: u32,
    pub difficulty: Difficulty,
    pub level_number: u32,
    /// Seed the RNG was constructed from
    pub seed: i64,
    /// Block count the generator aimed for (may exceed `optimal_moves`)
    pub target_blocks: u32,
    /// Blocks in placement order
    pub placements: Vec<Placement>,
}

impl LevelConfig {
    /// A clearing order that always succeeds: reverse placement order
    pub fn solution(&self) -> Vec<Placement> {
        self.placements.iter().rev().copied().collect()
    }

    /// True if the attempt budget ran out before the target was reached
    pub fn is_underfilled(&self) -> bool {
        self.optimal_moves < self.target_blocks
    }
}

/// Seed for a `(difficulty, level, modifier)` triple
pub fn derive_seed(difficulty: Difficulty, level_number: u32, seed_modifier: i64) -> i64 {
    i64::from(level_number)
        .wrapping_mul(LEVEL_SEED_STRIDE)
        .wrapping_add(difficulty.seed_offset())
        .wrapping_add(seed_modifier.wrapping_mul(MODIFIER_SEED_STRIDE))
}

/// Block count to aim for. Consumes exactly one RNG draw (the jitter).
pub fn target_block_count(
    difficulty: Difficulty,
    level_number: u32,
    rng: &mut ParkMiller,
    settings: &GeneratorSettings,
) -> u32 {
    let progress = f64::from(level_number.min(settings.progression_cap));
    let (base, rate, jitter) = match difficulty {
        Difficulty::Easy => (10, 0.03, 5.0),
        Difficulty::Medium => (16, 0.04, 6.0),
        Difficulty::Hard => (22, 0.04, 8.0),
    };
    let target = base + (progress * rate).floor() as u32 + (rng.next_f64() * jitter).floor() as u32;
    target.min(settings.max_blocks() as u32)
}

/// Level generator with fixed tuning
#[derive(Debug, Clone, Default)]
pub struct LevelGenerator {
    settings: GeneratorSettings,
}

impl LevelGenerator {
    /// Create a generator; settings are validated once here so generation
    /// itself cannot fail.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate the level for `(difficulty, level_number, seed_modifier)`
    pub fn generate(&self, difficulty: Difficulty, level_number: u32, seed_modifier: i64) -> LevelConfig {
        let seed = derive_seed(difficulty, level_number, seed_modifier);
        self.generate_with_seed(difficulty, seed, level_number)
    }

    /// Generate from an explicit seed
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: i64, level_number: u32) -> LevelConfig {
        let settings = &self.settings;
        let mut rng = ParkMiller::new(seed);
        let target = target_block_count(difficulty, level_number, &mut rng, settings);

        let size = settings.board_size;
        let mut grid = Board::new(size);

        // Every cell starts in the pool, shuffled once
        let mut pool: Vec<Pos> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Pos::new(x, y)))
            .collect();
        rng.shuffle(&mut pool);

        let max_attempts = target.saturating_mul(settings.attempts_per_block);
        let mut attempts = 0u32;
        let mut placements = Vec::with_capacity(target as usize);

        while (placements.len() as u32) < target && attempts < max_attempts {
            attempts += 1;

            if pool.is_empty() {
                break;
            }

            let idx = rng.index(pool.len().min(settings.candidate_window));
            let candidate = pool[idx];

            let mut directions = Direction::ALL;
            rng.shuffle(&mut directions);

            // A failed candidate stays in the pool and may be drawn again
            if let Some(direction) = directions
                .into_iter()
                .find(|&d| can_exit(&grid, candidate, d))
            {
                grid.set(candidate, Some(direction));
                pool.remove(idx);
                placements.push(Placement {
                    pos: candidate,
                    direction,
                });
            }
        }

        let placed = placements.len() as u32;
        if placed < target {
            log::debug!(
                "{} level {} (seed {}) under-filled: {}/{} blocks after {} attempts",
                difficulty,
                level_number,
                seed,
                placed,
                target,
                attempts
            );
        } else {
            log::debug!(
                "{} level {} (seed {}): {} blocks in {} attempts",
                difficulty,
                level_number,
                seed,
                placed,
                attempts
            );
        }

        LevelConfig {
            size,
            grid,
            optimal_moves: placed,
            difficulty,
            level_number,
            seed,
            target_blocks: target,
            placements,
        }
    }
}

/// Generate a level with the shipped tuning
pub fn generate_level_blocking(difficulty: Difficulty, level_number: u32, seed_modifier: i64) -> LevelConfig {
    LevelGenerator::default().generate(difficulty, level_number, seed_modifier)
}

/// Async form of [`generate_level_blocking`] for UIs that await all loads.
/// Never suspends.
pub async fn generate_level(difficulty: Difficulty, level_number: u32, seed_modifier: i64) -> LevelConfig {
    generate_level_blocking(difficulty, level_number, seed_modifier)
}
