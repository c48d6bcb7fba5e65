//! Serializable level descriptor
//!
//! The JSON shape UIs load: a flat list of arrows rather than a nested grid.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ArrowError, Result};
use crate::sim::{Board, Difficulty, Direction, LevelConfig, Pos};

/// One arrow on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// Level as exchanged with UIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSchema {
    pub level_id: String,
    pub grid_size: usize,
    pub arrows: Vec<Arrow>,
    pub difficulty: Difficulty,
    pub optimal_move_count: u32,
}

impl LevelSchema {
    pub fn from_config(level: &LevelConfig) -> Self {
        let arrows = level
            .grid
            .blocks()
            .map(|(pos, direction)| Arrow {
                x: pos.x,
                y: pos.y,
                direction,
            })
            .collect();
        Self {
            level_id: format!("{}-{}-{}", level.difficulty, level.level_number, level.seed),
            grid_size: level.size,
            arrows,
            difficulty: level.difficulty,
            optimal_move_count: level.optimal_moves,
        }
    }

    /// Rebuild the board, rejecting arrows off the grid or sharing a cell
    pub fn to_board(&self) -> Result<Board> {
        if self.grid_size == 0 {
            return Err(ArrowError::EmptyGrid);
        }
        let mut board = Board::new(self.grid_size);
        let mut seen = HashSet::with_capacity(self.arrows.len());
        for arrow in &self.arrows {
            if arrow.x >= self.grid_size || arrow.y >= self.grid_size {
                return Err(ArrowError::OutOfBounds {
                    x: arrow.x,
                    y: arrow.y,
                    size: self.grid_size,
                });
            }
            if !seen.insert((arrow.x, arrow.y)) {
                return Err(ArrowError::DuplicateArrow {
                    x: arrow.x,
                    y: arrow.y,
                });
            }
            board.set(Pos::new(arrow.x, arrow.y), Some(arrow.direction));
        }
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
