//! Difficulty survey
//!
//! Generates many boards for one `(difficulty, level)` with sampled seed
//! modifiers and summarises how full they came out.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::{Difficulty, LevelGenerator};

/// Summary over a batch of generated boards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub difficulty: Difficulty,
    pub level_number: u32,
    pub samples: u32,
    pub min_blocks: u32,
    pub max_blocks: u32,
    pub mean_blocks: f64,
    pub mean_target: f64,
    /// Boards that stopped short of their target
    pub underfilled: u32,
}

/// Sample `samples` boards. Seed modifiers come from a PCG stream seeded with
/// `seed`, so a survey is itself reproducible.
pub fn survey(
    generator: &LevelGenerator,
    difficulty: Difficulty,
    level_number: u32,
    samples: u32,
    seed: u64,
) -> SurveyReport {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut min_blocks = u32::MAX;
    let mut max_blocks = 0;
    let mut total_blocks = 0u64;
    let mut total_target = 0u64;
    let mut underfilled = 0;

    for _ in 0..samples {
        let modifier = rng.random_range(0..1_000_000i64);
        let level = generator.generate(difficulty, level_number, modifier);
        min_blocks = min_blocks.min(level.optimal_moves);
        max_blocks = max_blocks.max(level.optimal_moves);
        total_blocks += u64::from(level.optimal_moves);
        total_target += u64::from(level.target_blocks);
        if level.is_underfilled() {
            underfilled += 1;
        }
    }

    let (mean_blocks, mean_target) = if samples == 0 {
        min_blocks = 0;
        (0.0, 0.0)
    } else {
        (
            total_blocks as f64 / f64::from(samples),
            total_target as f64 / f64::from(samples),
        )
    };

    log::info!(
        "Surveyed {} {} level {}: mean {:.2} blocks, {} under-filled",
        samples,
        difficulty,
        level_number,
        mean_blocks,
        underfilled
    );

    SurveyReport {
        difficulty,
        level_number,
        samples,
        min_blocks,
        max_blocks,
        mean_blocks,
        mean_target,
        underfilled,
    }
}
