//! Board and core puzzle types
//!
//! A board is a square grid where every cell is either empty or holds a block
//! with an arrow. Coordinates are screen-style: `x` grows to the right and
//! `y` grows downward, so `Up` moves toward row 0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArrowError;

/// Direction a block slides when tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical order; the generator shuffles a fresh copy of this per attempt
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for Up/Down
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Glyph used by text renderings
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        })
    }
}

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Added to the level seed so tiers never share a layout
    pub fn seed_offset(&self) -> i64 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 100_000,
            Difficulty::Hard => 200_000,
        }
    }

    /// Tier the campaign assigns to a level number
    pub fn for_level(level: u32) -> Self {
        match level {
            0..10 => Difficulty::Easy,
            10..30 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// First campaign level of this tier
    pub fn start_level(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 10,
            Difficulty::Hard => 30,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ArrowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ArrowError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Square grid of optional blocks, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SavedBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Direction>>,
}

/// Serialized form; cell count is checked before it becomes a `Board`
#[derive(Deserialize)]
struct SavedBoard {
    size: usize,
    cells: Vec<Option<Direction>>,
}

impl TryFrom<SavedBoard> for Board {
    type Error = ArrowError;

    fn try_from(saved: SavedBoard) -> Result<Self, Self::Error> {
        if saved.size.checked_mul(saved.size) != Some(saved.cells.len()) {
            return Err(ArrowError::MalformedBoard {
                size: saved.size,
                cells: saved.cells.len(),
            });
        }
        Ok(Self {
            size: saved.size,
            cells: saved.cells,
        })
    }
}

impl Board {
    /// Create an empty `size x size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a signed coordinate lies on the board
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.x < self.size && pos.y < self.size).then_some(pos.y * self.size + pos.x)
    }

    /// Block at `pos`; `None` for empty or off-board cells
    pub fn get(&self, pos: Pos) -> Option<Direction> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Place (or clear, with `None`) a block. Off-board writes are ignored.
    pub fn set(&mut self, pos: Pos, cell: Option<Direction>) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// Remove and return the block at `pos`
    pub fn take(&mut self, pos: Pos) -> Option<Direction> {
        self.index(pos).and_then(|i| self.cells[i].take())
    }

    /// Number of blocks on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True once every block has left
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// All blocks in row-major order
    pub fn blocks(&self) -> impl Iterator<Item = (Pos, Direction)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|d| (Pos::new(i % size, i / size), d)))
    }

    /// Nested rows (`rows[y][x]`), the shape UIs iterate over
    pub fn rows(&self) -> Vec<Vec<Option<Direction>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or('.', Direction::arrow).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"LEFT\"");
        let back: Direction = serde_json::from_str("\"UP\"").unwrap();
        assert_eq!(back, Direction::Up);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Med ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "brutal".parse::<Difficulty>(),
            Err(ArrowError::UnknownDifficulty(s)) if s == "brutal"
        ));
    }

    #[test]
    fn test_difficulty_for_level() {
        assert_eq!(Difficulty::for_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(9), Difficulty::Easy);
        assert_eq!(Difficulty::for_level(10), Difficulty::Medium);
        assert_eq!(Difficulty::for_level(29), Difficulty::Medium);
        assert_eq!(Difficulty::for_level(30), Difficulty::Hard);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::for_level(d.start_level()), d);
        }
    }

    #[test]
    fn test_board_get_set_take() {
        let mut board = Board::new(3);
        assert!(board.is_cleared());
        board.set(Pos::new(2, 1), Some(Direction::Left));
        assert_eq!(board.get(Pos::new(2, 1)), Some(Direction::Left));
        assert_eq!(board.occupied_count(), 1);

        // Off-board access is inert
        board.set(Pos::new(3, 0), Some(Direction::Up));
        assert_eq!(board.get(Pos::new(3, 0)), None);
        assert_eq!(board.occupied_count(), 1);

        assert_eq!(board.take(Pos::new(2, 1)), Some(Direction::Left));
        assert!(board.is_cleared());
    }

    #[test]
    fn test_board_deserialize_checks_cell_count() {
        let err = serde_json::from_str::<Board>(r#"{"size":6,"cells":[null]}"#).unwrap_err();
        assert!(err.to_string().contains("6x6"));

        let mut board = Board::new(2);
        board.set(Pos::new(1, 1), Some(Direction::Up));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert_eq!(back.get(Pos::new(1, 1)), Some(Direction::Up));
    }

    #[test]
    fn test_board_rows_and_blocks() {
        let mut board = Board::new(2);
        board.set(Pos::new(1, 0), Some(Direction::Right));
        board.set(Pos::new(0, 1), Some(Direction::Down));
        let rows = board.rows();
        assert_eq!(rows[0], vec![None, Some(Direction::Right)]);
        assert_eq!(rows[1], vec![Some(Direction::Down), None]);

        let blocks: Vec<_> = board.blocks().collect();
        assert_eq!(
            blocks,
            vec![
                (Pos::new(1, 0), Direction::Right),
                (Pos::new(0, 1), Direction::Down)
            ]
        );
        assert_eq!(board.to_string(), ". →\n↓ .\n");
    }
}
