//! # Game Module
//!
//! Board coordinates and stone sides, independent of any pixel layout.
//!
//! This module contains the pieces a host needs to turn a Go position into
//! draw instructions:
//! - Points on the board and Go label parsing
//! - The two stone sides
//! - A board that enforces one stone per point
//! - The black/white JSON board format

pub mod board;
pub mod format;

pub use board::*;
pub use format::*;

use crate::{GobanError, GobanResult};
use serde::{Deserialize, Serialize};

/// Which stone image a token is drawn with.
///
/// Black stones are dark, white stones are light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    /// Wire code for a light stone.
    pub const LIGHT_CODE: i64 = 0;
    /// Wire code for a dark stone.
    pub const DARK_CODE: i64 = 1;

    /// Decodes a numeric side code.
    ///
    /// Only `0` and `1` are accepted; anything else is rejected rather than
    /// silently drawn as a light stone.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::Side;
    ///
    /// assert_eq!(Side::from_code(0).unwrap(), Side::Light);
    /// assert_eq!(Side::from_code(1).unwrap(), Side::Dark);
    /// assert!(Side::from_code(2).is_err());
    /// ```
    pub fn from_code(code: i64) -> GobanResult<Self> {
        match code {
            Self::LIGHT_CODE => Ok(Side::Light),
            Self::DARK_CODE => Ok(Side::Dark),
            other => Err(GobanError::InvalidSide(other)),
        }
    }

    /// Returns the numeric code for this side.
    pub fn code(self) -> i64 {
        match self {
            Side::Light => Self::LIGHT_CODE,
            Side::Dark => Self::DARK_CODE,
        }
    }

    /// Character used for this side in ASCII boards.
    pub fn ascii_char(self) -> char {
        match self {
            Side::Dark => '#',
            Side::Light => 'O',
        }
    }
}

impl TryFrom<i64> for Side {
    type Error = GobanError;

    fn try_from(code: i64) -> GobanResult<Self> {
        Side::from_code(code)
    }
}

/// A point on the board, counted from the top-left corner.
///
/// # Examples
///
/// ```
/// use goban::Point;
///
/// let point = Point::from_label("A1", 19).unwrap();
/// assert_eq!(point, Point::new(18, 0));
///
/// let point = Point::from_label("cb", 19).unwrap();
/// assert_eq!(point, Point::new(1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Zero-indexed row from the top
    pub row: i32,
    /// Zero-indexed column from the left
    pub col: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Parses a point label.
    ///
    /// Two formats are accepted:
    /// - `"A1"`: the letter is the column from the left and the number is the
    ///   row counted from the bottom, so `1` is row `board_size - 1`.
    /// - `"aa"` (SGF): the first letter is the column from the left and the
    ///   second is the row from the top.
    pub fn from_label(label: &str, board_size: usize) -> GobanResult<Self> {
        let bad_label = || GobanError::PointFormat(label.to_string());

        let mut chars = label.chars();
        let first = chars.next().ok_or_else(bad_label)?;
        if !first.is_ascii_alphabetic() {
            return Err(bad_label());
        }
        let rest = chars.as_str();

        let point = if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            let number: i32 = rest.parse().map_err(|_| bad_label())?;
            let size = i32::try_from(board_size).map_err(|_| bad_label())?;
            let col = first.to_ascii_uppercase() as i32 - 'A' as i32;
            let row = size.checked_sub(number).ok_or_else(bad_label)?;
            Point::new(row, col)
        } else {
            let mut rest_chars = rest.chars();
            let second = match (rest_chars.next(), rest_chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => c,
                _ => return Err(bad_label()),
            };
            let col = first.to_ascii_lowercase() as i32 - 'a' as i32;
            let row = second.to_ascii_lowercase() as i32 - 'a' as i32;
            Point::new(row, col)
        };

        if point.row < 0 || point.col < 0 {
            return Err(bad_label());
        }

        Ok(point)
    }

    /// Returns the SGF label for this point (`"aa"` is the top-left corner).
    ///
    /// Returns None for points SGF letters cannot express.
    pub fn sgf_label(self) -> Option<String> {
        let letter = |index: i32| {
            u8::try_from(index)
                .ok()
                .filter(|i| *i < 26)
                .map(|i| (b'a' + i) as char)
        };
        Some(format!("{}{}", letter(self.col)?, letter(self.row)?))
    }
}

/// One instruction to draw a token at a grid cell.
///
/// Placements are built per draw call and never kept by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: i32,
    pub col: i32,
    pub side: Side,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(row: i32, col: i32, side: Side) -> Self {
        Self { row, col, side }
    }

    /// Creates a placement at a board point.
    pub fn at(point: Point, side: Side) -> Self {
        Self::new(point.row, point.col, side)
    }

    /// The board point this placement targets.
    pub fn point(self) -> Point {
        Point::new(self.row, self.col)
    }
}
