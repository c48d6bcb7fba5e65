//! Exit checks and path tracing
//!
//! A block leaves the board only if every cell between it and the edge, in
//! the direction of its arrow, is empty.

use super::state::{Board, Direction, Pos};

/// Path a block would take if tapped
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathPreview {
    /// Empty cells crossed before leaving the board or hitting a blocker
    pub path: Vec<Pos>,
    /// First occupied cell on the ray, if any
    pub collision: Option<Pos>,
    /// Occupied cells directly beside the path (perpendicular neighbours)
    pub adjacent: Vec<Pos>,
}

impl PathPreview {
    /// True if the block would leave the board
    pub fn exits(&self) -> bool {
        self.collision.is_none()
    }
}

/// Step one cell from `(x, y)`, returning the next on-board position
fn step(board: &Board, x: isize, y: isize, direction: Direction) -> Option<(isize, isize)> {
    let (dx, dy) = direction.delta();
    let (nx, ny) = (x + dx, y + dy);
    board.contains(nx, ny).then_some((nx, ny))
}

/// Check whether a block at `start` moving in `direction` reaches the edge
/// without passing through an occupied cell. The start cell itself is not
/// inspected.
pub fn can_exit(board: &Board, start: Pos, direction: Direction) -> bool {
    let mut cursor = step(board, start.x as isize, start.y as isize, direction);
    while let Some((x, y)) = cursor {
        if board.is_occupied(Pos::new(x as usize, y as usize)) {
            return false;
        }
        cursor = step(board, x, y, direction);
    }
    true
}

/// Trace the ray of the block at `pos`. Returns `None` for empty cells.
pub fn trace_path(board: &Board, pos: Pos) -> Option<PathPreview> {
    let direction = board.get(pos)?;
    let mut preview = PathPreview::default();

    let mut cursor = step(board, pos.x as isize, pos.y as isize, direction);
    while let Some((x, y)) = cursor {
        let cell = Pos::new(x as usize, y as usize);
        if board.is_occupied(cell) {
            preview.collision = Some(cell);
            break;
        }
        preview.path.push(cell);

        let sides = if direction.is_vertical() {
            [(x - 1, y), (x + 1, y)]
        } else {
            [(x, y - 1), (x, y + 1)]
        };
        for (sx, sy) in sides {
            if !board.contains(sx, sy) {
                continue;
            }
            let side = Pos::new(sx as usize, sy as usize);
            if board.is_occupied(side) && !preview.adjacent.contains(&side) {
                preview.adjacent.push(side);
            }
        }

        cursor = step(board, x, y, direction);
    }

    Some(preview)
}

/// Every block that could leave the board right now, row-major
pub fn exitable_blocks(board: &Board) -> Vec<Pos> {
    board
        .blocks()
        .filter(|&(pos, dir)| can_exit(board, pos, dir))
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, blocks: &[(usize, usize, Direction)]) -> Board {
        let mut board = Board::new(size);
        for &(x, y, d) in blocks {
            board.set(Pos::new(x, y), Some(d));
        }
        board
    }

    #[test]
    fn test_can_exit_empty_board() {
        let board = Board::new(6);
        for y in 0..6 {
            for x in 0..6 {
                for d in Direction::ALL {
                    assert!(can_exit(&board, Pos::new(x, y), d));
                }
            }
        }
    }

    #[test]
    fn test_can_exit_blocked() {
        let board = board_with(6, &[(2, 2, Direction::Right), (4, 2, Direction::Up)]);
        assert!(!can_exit(&board, Pos::new(2, 2), Direction::Right));
        assert!(can_exit(&board, Pos::new(2, 2), Direction::Left));
        assert!(can_exit(&board, Pos::new(2, 2), Direction::Up));
        assert!(can_exit(&board, Pos::new(2, 2), Direction::Down));
        // Blocker is behind, not ahead
        assert!(can_exit(&board, Pos::new(4, 2), Direction::Right));
        assert!(!can_exit(&board, Pos::new(4, 2), Direction::Left));
    }

    #[test]
    fn test_can_exit_ignores_start_cell() {
        let board = board_with(3, &[(1, 1, Direction::Up)]);
        assert!(can_exit(&board, Pos::new(1, 1), Direction::Up));
    }

    #[test]
    fn test_can_exit_from_edge() {
        let board = board_with(3, &[(0, 0, Direction::Up), (1, 0, Direction::Left)]);
        assert!(can_exit(&board, Pos::new(0, 0), Direction::Up));
        assert!(!can_exit(&board, Pos::new(1, 0), Direction::Left));
    }

    #[test]
    fn test_trace_path_collision_and_adjacent() {
        // Block at (0,2) heading right, blocker at (4,2), neighbours above/below the path
        let board = board_with(
            6,
            &[
                (0, 2, Direction::Right),
                (4, 2, Direction::Down),
                (2, 1, Direction::Left),
                (3, 3, Direction::Up),
            ],
        );
        let preview = trace_path(&board, Pos::new(0, 2)).unwrap();
        assert_eq!(preview.path, vec![Pos::new(1, 2), Pos::new(2, 2), Pos::new(3, 2)]);
        assert_eq!(preview.collision, Some(Pos::new(4, 2)));
        assert_eq!(preview.adjacent, vec![Pos::new(2, 1), Pos::new(3, 3)]);
        assert!(!preview.exits());
    }

    #[test]
    fn test_trace_path_clear() {
        let board = board_with(4, &[(1, 3, Direction::Up)]);
        let preview = trace_path(&board, Pos::new(1, 3)).unwrap();
        assert!(preview.exits());
        assert_eq!(preview.path.len(), 3);
        assert!(preview.adjacent.is_empty());
        assert!(trace_path(&board, Pos::new(0, 0)).is_none());
    }

    #[test]
    fn test_exitable_blocks() {
        // Two blocks facing each other: neither can leave
        let board = board_with(4, &[(0, 0, Direction::Right), (3, 0, Direction::Left)]);
        assert!(exitable_blocks(&board).is_empty());

        let board = board_with(4, &[(0, 0, Direction::Right), (3, 0, Direction::Down)]);
        assert_eq!(exitable_blocks(&board), vec![Pos::new(3, 0)]);
    }
}
