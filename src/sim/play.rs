//! Board-level play rules
//!
//! Tracks the blocks left on a generated board as the player taps them.
//! A tap either sends the block off the board or collides, which ends the
//! attempt until `retry`.

use serde::{Deserialize, Serialize};

use super::exit::{exitable_blocks, trace_path};
use super::generator::LevelConfig;
use super::state::{Board, Direction, Pos};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Taps are accepted
    Playing,
    /// Every block has left the board
    Won,
    /// A tapped block hit another block
    Collided,
}

/// Result of a single tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Empty cell, or the session is over
    Ignored,
    /// Block slid off the board
    Exited { pos: Pos, direction: Direction },
    /// Block was stopped by `blocker`
    Collided { pos: Pos, blocker: Pos },
}

/// A single attempt at a level
#[derive(Debug, Clone)]
pub struct PlaySession {
    initial: Board,
    board: Board,
    status: SessionStatus,
    moves: u32,
}

impl PlaySession {
    pub fn new(level: &LevelConfig) -> Self {
        Self::from_board(level.grid.clone())
    }

    pub fn from_board(board: Board) -> Self {
        let status = if board.is_cleared() {
            SessionStatus::Won
        } else {
            SessionStatus::Playing
        };
        Self {
            initial: board.clone(),
            board,
            status,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Blocks that successfully left the board
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Blocks still on the board
    pub fn remaining(&self) -> usize {
        self.board.occupied_count()
    }

    /// Tap the block at `pos`
    pub fn tap(&mut self, pos: Pos) -> TapOutcome {
        if self.status != SessionStatus::Playing {
            return TapOutcome::Ignored;
        }
        let Some(direction) = self.board.get(pos) else {
            return TapOutcome::Ignored;
        };

        if let Some(blocker) = trace_path(&self.board, pos).and_then(|p| p.collision) {
            self.status = SessionStatus::Collided;
            log::debug!("Block at {:?} collided with {:?}", pos, blocker);
            return TapOutcome::Collided { pos, blocker };
        }

        self.board.take(pos);
        self.moves += 1;
        if self.board.is_cleared() {
            self.status = SessionStatus::Won;
            log::info!("Board cleared in {} moves", self.moves);
        }
        TapOutcome::Exited { pos, direction }
    }

    /// A block that can leave right now (first in row-major order)
    pub fn hint(&self) -> Option<Pos> {
        if self.status != SessionStatus::Playing {
            return None;
        }
        exitable_blocks(&self.board).into_iter().next()
    }

    /// Restore the starting board
    pub fn retry(&mut self) {
        self.board = self.initial.clone();
        self.moves = 0;
        self.status = if self.board.is_cleared() {
            SessionStatus::Won
        } else {
            SessionStatus::Playing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Difficulty, generate_level_blocking};

    fn two_block_board() -> Board {
        // (0,0) points right into (2,0); (2,0) points down and is free
        let mut board = Board::new(3);
        board.set(Pos::new(0, 0), Some(Direction::Right));
        board.set(Pos::new(2, 0), Some(Direction::Down));
        board
    }

    #[test]
    fn test_collision_ends_attempt() {
        let mut session = PlaySession::from_board(two_block_board());
        let outcome = session.tap(Pos::new(0, 0));
        assert_eq!(
            outcome,
            TapOutcome::Collided {
                pos: Pos::new(0, 0),
                blocker: Pos::new(2, 0)
            }
        );
        assert_eq!(session.status(), SessionStatus::Collided);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.tap(Pos::new(2, 0)), TapOutcome::Ignored);
    }

    #[test]
    fn test_clear_in_order_wins() {
        let mut session = PlaySession::from_board(two_block_board());
        assert_eq!(session.hint(), Some(Pos::new(2, 0)));
        assert!(matches!(session.tap(Pos::new(2, 0)), TapOutcome::Exited { .. }));
        assert_eq!(session.status(), SessionStatus::Playing);
        assert!(matches!(session.tap(Pos::new(0, 0)), TapOutcome::Exited { .. }));
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.moves(), 2);
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn test_collision_reports_nearest_blocker() {
        // Two blocks ahead on the same row; the nearer one stops the tap
        let mut board = Board::new(5);
        board.set(Pos::new(0, 2), Some(Direction::Right));
        board.set(Pos::new(2, 2), Some(Direction::Up));
        board.set(Pos::new(4, 2), Some(Direction::Up));
        let mut session = PlaySession::from_board(board);
        assert_eq!(
            session.tap(Pos::new(0, 2)),
            TapOutcome::Collided {
                pos: Pos::new(0, 2),
                blocker: Pos::new(2, 2)
            }
        );
    }

    #[test]
    fn test_empty_cell_ignored() {
        let mut session = PlaySession::from_board(two_block_board());
        assert_eq!(session.tap(Pos::new(1, 1)), TapOutcome::Ignored);
        assert_eq!(session.tap(Pos::new(9, 9)), TapOutcome::Ignored);
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_retry_restores_board() {
        let mut session = PlaySession::from_board(two_block_board());
        session.tap(Pos::new(2, 0));
        session.tap(Pos::new(0, 0));
        assert_eq!(session.status(), SessionStatus::Won);
        session.retry();
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_generated_board_never_deadlocks() {
        // Following hints alone always clears a generated board
        for d in Difficulty::ALL {
            for level in [1, 15, 60, 200] {
                let level_cfg = generate_level_blocking(d, level, 0);
                let mut session = PlaySession::new(&level_cfg);
                while session.status() == SessionStatus::Playing {
                    let pos = session.hint().expect("a generated board always has a free block");
                    assert!(matches!(session.tap(pos), TapOutcome::Exited { .. }));
                }
                assert_eq!(session.status(), SessionStatus::Won);
                assert_eq!(session.moves(), level_cfg.optimal_moves);
            }
        }
    }

    #[test]
    fn test_solution_clears_board() {
        let level = generate_level_blocking(Difficulty::Hard, 42, 2);
        let mut session = PlaySession::new(&level);
        for step in level.solution() {
            assert_eq!(
                session.tap(step.pos),
                TapOutcome::Exited {
                    pos: step.pos,
                    direction: step.direction
                }
            );
        }
        assert_eq!(session.status(), SessionStatus::Won);
    }
}
