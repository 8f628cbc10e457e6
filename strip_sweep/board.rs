//! Single row board passed to the solver.
//!
//! The solver reads a board as a string over the alphabet `.xo`, one character per cell, and
//! cannot handle boards longer than [`MAX_STRIP_LEN`] cells.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Longest board the solver accepts
pub const MAX_STRIP_LEN: usize = 64;

/// Cell on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Cell {
    /// Cell without a stone
    #[default]
    Empty,

    /// Cell with Black's stone
    Black,

    /// Cell with White's stone
    White,
}

impl Cell {
    /// Character used for the cell in solver input
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'x',
            Cell::White => 'o',
        }
    }

    /// Inverse of [`Cell::to_char`]
    #[inline]
    pub const fn from_char(input: char) -> Option<Self> {
        match input {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::Black),
            'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// Reason a string could not be read as a [`Strip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// Character at `position` is not one of `.xo`
    InvalidCell {
        /// Zero-based index of the offending character
        position: usize,
        /// The offending character
        found: char,
    },

    /// Board has more than [`MAX_STRIP_LEN`] cells
    TooLong(usize),
}

impl Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::InvalidCell { position, found } => {
                write!(f, "Invalid cell '{found}' at position {position}")
            }
            StripError::TooLong(len) => write!(
                f,
                "Board of length {len} exceeds the maximum of {MAX_STRIP_LEN}"
            ),
        }
    }
}

impl std::error::Error for StripError {}

/// 1xN board
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strip {
    cells: Vec<Cell>,
}

impl Strip {
    /// Creates a strip from cells, returns `None` if it is longer than [`MAX_STRIP_LEN`]
    pub fn new(cells: Vec<Cell>) -> Option<Self> {
        (cells.len() <= MAX_STRIP_LEN).then_some(Self { cells })
    }

    /// Opening position of length `len`: an empty cell, Black's stone, then `len - 2` empty
    /// cells, e.g. `.x....` for `len = 6`.
    ///
    /// Returns `None` if `len` is below 2 or above [`MAX_STRIP_LEN`].
    pub fn opening(len: usize) -> Option<Self> {
        if len < 2 {
            return None;
        }

        let mut cells = Vec::with_capacity(len);
        cells.push(Cell::Empty);
        cells.push(Cell::Black);
        cells.extend(std::iter::repeat_n(Cell::Empty, len - 2));
        Self::new(cells)
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the strip has no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl FromStr for Strip {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            let cell = Cell::from_char(found).ok_or(StripError::InvalidCell { position, found })?;
            cells.push(cell);
        }

        let len = cells.len();
        Self::new(cells).ok_or(StripError::TooLong(len))
    }
}

impl Display for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }

        Ok(())
    }
}
