//! Board file parsing
//!
//! Two file shapes share one per-line format: a *single-board* file holds
//! exactly 19 significant lines of 19 cell values each, and a *batch* file
//! starts with a test-case count followed by that many 19-line blocks.
//! Blank lines and `#` comments are skipped everywhere.

use std::fs;
use std::path::Path;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// A parsed input file
#[derive(Debug, Clone)]
pub enum Input {
    Single(Board),
    Batch(Vec<Board>),
}

/// Everything that can go wrong while reading a board file.
///
/// All variants surface to the user as a single line; none are
/// recoverable, a failed load aborts the whole invocation.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("line {line}: found {found} values, expected {}", BOARD_SIZE)]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid cell value {value} (must be 0, 1, or 2)")]
    CellValue { line: usize, value: i32 },

    #[error("line {line}: '{token}' is not an integer")]
    BadToken { line: usize, token: String },

    #[error("found {found} board lines, expected {}", BOARD_SIZE)]
    RowCount { found: usize },

    #[error("invalid test case count '{token}'")]
    CaseCount { token: String },

    #[error("test case {case}: only {found} of {} board lines present", BOARD_SIZE)]
    TruncatedCase { case: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a single-board file.
pub fn load_board(path: &Path) -> Result<Board, LoadError> {
    parse_board(&fs::read_to_string(path)?)
}

/// Load a batch file (count line, then `count` boards).
pub fn load_batch(path: &Path) -> Result<Vec<Board>, LoadError> {
    parse_batch(&fs::read_to_string(path)?)
}

/// Load a file, detecting its shape.
pub fn load_input(path: &Path) -> Result<Input, LoadError> {
    parse_input(&fs::read_to_string(path)?)
}

/// Parse a single-board file body.
pub fn parse_board(text: &str) -> Result<Board, LoadError> {
    let lines = significant_lines(text);
    if lines.len() != BOARD_SIZE {
        return Err(LoadError::RowCount { found: lines.len() });
    }
    board_from_lines(&lines, 0)
}

/// Parse a batch file body.
///
/// A malformed count aborts everything; a truncated case aborts at the
/// point of detection. No partial results either way.
pub fn parse_batch(text: &str) -> Result<Vec<Board>, LoadError> {
    let lines = significant_lines(text);
    let (&count_line, board_lines) = lines.split_first().ok_or(LoadError::CaseCount {
        token: String::new(),
    })?;

    let count: usize = count_line.parse().map_err(|_| LoadError::CaseCount {
        token: count_line.to_string(),
    })?;

    let mut boards = Vec::with_capacity(count);
    for case in 1..=count {
        let offset = (case - 1) * BOARD_SIZE;
        let remaining = board_lines.len().saturating_sub(offset);
        if remaining < BOARD_SIZE {
            return Err(LoadError::TruncatedCase {
                case,
                found: remaining,
            });
        }
        boards.push(board_from_lines(
            &board_lines[offset..offset + BOARD_SIZE],
            offset,
        )?);
    }
    Ok(boards)
}

/// Parse a file body, detecting its shape: a first significant line with a
/// single token is a batch count, anything else is a board row.
pub fn parse_input(text: &str) -> Result<Input, LoadError> {
    let batch = significant_lines(text)
        .first()
        .is_some_and(|line| line.split_whitespace().nth(1).is_none());
    if batch {
        Ok(Input::Batch(parse_batch(text)?))
    } else {
        Ok(Input::Single(parse_board(text)?))
    }
}

/// Non-empty lines that are not `#` comments, trimmed.
fn significant_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Build a board from exactly `BOARD_SIZE` significant lines.
///
/// `line_base` offsets the line numbers used in error reports; they are
/// 1-based over the file's significant board lines (the batch count line
/// not included).
fn board_from_lines(lines: &[&str], line_base: usize) -> Result<Board, LoadError> {
    debug_assert_eq!(lines.len(), BOARD_SIZE);
    let mut board = Board::new();
    for (row, text) in lines.iter().enumerate() {
        parse_row(&mut board, row, line_base + row + 1, text)?;
    }
    Ok(board)
}

/// Parse one board row into `board`.
fn parse_row(board: &mut Board, row: usize, line: usize, text: &str) -> Result<(), LoadError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != BOARD_SIZE {
        return Err(LoadError::ColumnCount {
            line,
            found: tokens.len(),
        });
    }

    for (col, token) in tokens.iter().enumerate() {
        let value: i32 = token.parse().map_err(|_| LoadError::BadToken {
            line,
            token: token.to_string(),
        })?;
        let stone = Stone::from_code(value).ok_or(LoadError::CellValue { line, value })?;
        board.place_stone(Pos::new(row as u8, col as u8), stone);
    }
    Ok(())
}
