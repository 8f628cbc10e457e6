//! Side to move

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Player to move first, written as `b` or `w` on the solver command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Token passed to the solver
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }
}

/// Token was not `b` nor `w`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlayerError(String);

impl Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid player '{}', expected 'b' or 'w'", self.0)
    }
}

impl std::error::Error for ParsePlayerError {}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "b" => Ok(Player::Black),
            "w" => Ok(Player::White),
            _ => Err(ParsePlayerError(s.to_string())),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
