//! # Board Formats
//!
//! The black/white JSON format used for stored problems:
//! `{"black": ["aa", "ab"], "white": ["bb"]}`.

use super::{Board, Point, Side};
use crate::GobanResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stone labels grouped by colour, as read from JSON.
///
/// Both fields are required. Labels may use either `"A1"` or SGF notation,
/// see [`Point::from_label`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BwBoard {
    pub black: Vec<String>,
    pub white: Vec<String>,
}

impl BwBoard {
    /// Parses a board from a JSON string.
    pub fn from_json(json: &str) -> GobanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a board from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> GobanResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Writes the board as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> GobanResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::debug!("Saved position to {}", path.as_ref().display());
        Ok(())
    }

    /// Builds the same stones back into labels from a board.
    pub fn from_board(board: &Board) -> Self {
        let mut bw = Self::default();
        for stone in board.stones() {
            let Some(label) = stone.point.sgf_label() else {
                continue;
            };
            match stone.side {
                Side::Dark => bw.black.push(label),
                Side::Light => bw.white.push(label),
            }
        }
        bw
    }
}

impl Board {
    /// Builds a board holding only the listed stones.
    ///
    /// Black stones are placed first, then white. Fails on the first label
    /// that does not parse, falls off the board, or lands on another stone.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::{Board, BwBoard};
    ///
    /// let bw = BwBoard::from_json(r#"{"black": ["aa", "ac"], "white": ["ba"]}"#).unwrap();
    /// let board = Board::from_bw(&bw, 3).unwrap();
    /// assert_eq!(board.ascii_board(), "#O.\n...\n#..");
    /// ```
    pub fn from_bw(bw: &BwBoard, size: usize) -> GobanResult<Board> {
        let mut board = Board::new(size)?;

        for label in &bw.black {
            board.place(Point::from_label(label, size)?, Side::Dark)?;
        }
        for label in &bw.white {
            board.place(Point::from_label(label, size)?, Side::Light)?;
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GobanError;

    #[test]
    fn test_a1_board() {
        let bw = BwBoard {
            black: vec!["A3".to_string(), "A1".to_string()],
            white: vec!["B3".to_string()],
        };
        let board = Board::from_bw(&bw, 3).unwrap();
        assert_eq!(board.ascii_board(), "#O.\n...\n#..");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        assert!(matches!(
            BwBoard::from_json(r#"{"black": ["aa"]}"#),
            Err(GobanError::Serde(_))
        ));
    }

    #[test]
    fn test_overlapping_colours_rejected() {
        let bw = BwBoard::from_json(r#"{"black": ["aa"], "white": ["aa"]}"#).unwrap();
        assert!(matches!(
            Board::from_bw(&bw, 9),
            Err(GobanError::Occupied { row: 0, col: 0 })
        ));
    }

    #[test]
    fn test_label_off_board_rejected() {
        let bw = BwBoard::from_json(r#"{"black": ["jj"], "white": []}"#).unwrap();
        assert!(matches!(
            Board::from_bw(&bw, 9),
            Err(GobanError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_negative_a1_number_rejected() {
        let bw = BwBoard::from_json(r#"{"black": ["A-2147483648"], "white": []}"#).unwrap();
        assert!(matches!(
            Board::from_bw(&bw, 19),
            Err(GobanError::PointFormat(_))
        ));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let bw = BwBoard::from_json(r#"{"black": ["aa"], "white": []}"#).unwrap();
        assert!(matches!(
            Board::from_bw(&bw, usize::MAX),
            Err(GobanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_board_keeps_stones() {
        let bw = BwBoard::from_json(r#"{"black": ["cc", "dd"], "white": ["ee"]}"#).unwrap();
        let board = Board::from_bw(&bw, 9).unwrap();

        let rebuilt = BwBoard::from_board(&board);
        assert_eq!(rebuilt, bw);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problem.json");
        std::fs::write(&path, r#"{"black": ["aa"], "white": ["bb"]}"#).unwrap();

        let bw = BwBoard::load(&path).unwrap();
        assert_eq!(bw.black, vec!["aa".to_string()]);
        assert_eq!(bw.white, vec!["bb".to_string()]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let mut board = Board::new(9).unwrap();
        board.place(Point::new(2, 3), Side::Dark).unwrap();
        board.place(Point::new(4, 4), Side::Light).unwrap();
        BwBoard::from_board(&board).save(&path).unwrap();

        let loaded = Board::from_bw(&BwBoard::load(&path).unwrap(), 9).unwrap();
        assert_eq!(loaded, board);
    }
}
