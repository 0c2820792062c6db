//! # Board
//!
//! A square Go board holding at most one stone per point.

use super::{Placement, Point, Side};
use crate::config::MAX_BOARD_SIZE;
use crate::{GobanError, GobanResult};
use serde::{Deserialize, Serialize};

/// A stone on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub point: Point,
    pub side: Side,
}

/// A board position: either a problem setup or a game at a point in time.
///
/// Captures and move legality are not modelled; the board only refuses
/// stones off the board or on top of another stone.
///
/// # Examples
///
/// ```
/// use goban::{Board, Point, Side};
///
/// let mut board = Board::new(3).unwrap();
/// board.place(Point::new(0, 0), Side::Dark).unwrap();
/// board.place(Point::new(0, 1), Side::Light).unwrap();
/// assert_eq!(board.ascii_board(), "#O.\n...\n...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major points, `None` where empty
    grid: Vec<Option<Side>>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// Fails for sizes above [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> GobanResult<Self> {
        if size > MAX_BOARD_SIZE {
            return Err(GobanError::InvalidConfig(format!(
                "board size {} exceeds the maximum of {}",
                size, MAX_BOARD_SIZE
            )));
        }

        Ok(Self {
            size,
            grid: vec![None; size * size],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Returns true if the point lies on the board.
    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Returns the stone at a point, if any.
    pub fn get(&self, point: Point) -> Option<Side> {
        self.index(point).and_then(|i| self.grid[i])
    }

    /// Places a stone.
    ///
    /// Fails if the point is off the board or already holds a stone.
    pub fn place(&mut self, point: Point, side: Side) -> GobanResult<()> {
        let index = self.index(point).ok_or(GobanError::OutOfBounds {
            row: point.row,
            col: point.col,
            size: self.size,
        })?;

        if self.grid[index].is_some() {
            return Err(GobanError::Occupied {
                row: point.row,
                col: point.col,
            });
        }

        self.grid[index] = Some(side);
        Ok(())
    }

    /// Iterates over all stones in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = Stone> + '_ {
        self.grid.iter().enumerate().filter_map(move |(i, side)| {
            side.map(|side| Stone {
                point: Point::new((i / self.size) as i32, (i % self.size) as i32),
                side,
            })
        })
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.grid.iter().filter(|side| side.is_some()).count()
    }

    /// Converts the stones into renderer placements, row-major.
    pub fn placements(&self) -> Vec<Placement> {
        self.stones()
            .map(|stone| Placement::at(stone.point, stone.side))
            .collect()
    }

    /// Returns ASCII art for the board: `#` dark, `O` light, `.` empty.
    pub fn ascii_board(&self) -> String {
        self.grid
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|side| side.map_or('.', Side::ascii_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
