//! Running the solver over a range of board sizes
//!
//! For every size `n` in the range the sweep solves the [opening strip](Strip::opening) of
//! width `n`, reports anything the solver printed on standard error and appends its standard
//! output to the [results log](ResultsLog). Sizes are processed one at a time in ascending order
//! and each record is on disk before the next solver run starts.

use crate::{
    board::{MAX_STRIP_LEN, Strip},
    player::Player,
    results::{Record, ResultsLog},
    solver::Solve,
};
use std::{
    fmt::{self, Display},
    io,
    ops::Range,
    process::ExitStatus,
};

/// Board sizes swept when nothing else is requested
pub const DEFAULT_SIZES: Range<usize> = 16..40;

/// Player to move when nothing else is requested
pub const DEFAULT_PLAYER: Player = Player::White;

/// Solver executable, relative to the working directory
pub const DEFAULT_SOLVER: &str = "./solver_main";

/// Results file, relative to the working directory
pub const DEFAULT_RESULTS_PATH: &str = "results.txt";

/// Progress notification emitted while sweeping
#[derive(Debug)]
pub enum Event<'a> {
    /// Solver is about to run on `board`
    Solving {
        /// Board passed to the solver
        board: &'a Strip,
    },

    /// Solver wrote to standard error. Does not stop the sweep.
    Diagnostics {
        /// Width of the board being solved
        size: usize,
        /// Captured standard error
        stderr: &'a str,
    },

    /// Record was written to the results log
    Appended {
        /// Written record
        record: &'a Record,
        /// Exit status of the solver that produced it
        status: ExitStatus,
    },
}

/// Reason a sweep could not be set up or finished
#[derive(Debug)]
pub enum SweepError {
    /// Range is empty or contains sizes the solver cannot take
    InvalidSizes(Range<usize>),

    /// Solver could not be started on board of width `size`
    Launch {
        /// Width of the board being solved
        size: usize,
        /// Underlying process error
        source: io::Error,
    },

    /// Solver output for board of width `size` could not be written
    Append {
        /// Width of the board being solved
        size: usize,
        /// Underlying file error
        source: io::Error,
    },
}

impl Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidSizes(sizes) => write!(
                f,
                "Invalid board sizes {}..{}, expected a non-empty range within 2..{}",
                sizes.start,
                sizes.end,
                MAX_STRIP_LEN + 1
            ),
            SweepError::Launch { size, .. } => {
                write!(f, "Could not run solver on board of size 1x{size}")
            }
            SweepError::Append { size, .. } => {
                write!(f, "Could not save result for board of size 1x{size}")
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::InvalidSizes(_) => None,
            SweepError::Launch { source, .. } | SweepError::Append { source, .. } => Some(source),
        }
    }
}

/// Sequential run of the solver over a range of board sizes
#[derive(Debug, Clone)]
pub struct Sweep {
    sizes: Range<usize>,
    player: Player,
    results: ResultsLog,
}

impl Sweep {
    /// Create a sweep over `sizes` (end exclusive) with `player` to move in every position.
    ///
    /// # Errors
    /// - `sizes` is empty, starts below 2 or ends past [`MAX_STRIP_LEN`]
    pub fn new(
        sizes: Range<usize>,
        player: Player,
        results: ResultsLog,
    ) -> Result<Self, SweepError> {
        if sizes.is_empty() || sizes.start < 2 || sizes.end > MAX_STRIP_LEN + 1 {
            return Err(SweepError::InvalidSizes(sizes));
        }

        Ok(Self {
            sizes,
            player,
            results,
        })
    }

    /// Board sizes, end exclusive
    pub fn sizes(&self) -> Range<usize> {
        self.sizes.clone()
    }

    /// Player to move
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Where the records go
    pub const fn results(&self) -> &ResultsLog {
        &self.results
    }

    /// Boards in the order they are solved
    pub fn boards(&self) -> impl Iterator<Item = Strip> + '_ {
        self.sizes.clone().filter_map(Strip::opening)
    }

    /// Solve every board and append the results, returning number of appended records.
    ///
    /// # Errors
    /// - Solver could not be started. Records of already solved boards stay in the log, nothing
    ///   is written for the failing one.
    /// - Results log could not be written
    pub fn run<S, F>(&self, solver: &S, mut on_event: F) -> Result<usize, SweepError>
    where
        S: Solve + ?Sized,
        F: FnMut(Event<'_>),
    {
        let mut appended = 0;

        for board in self.boards() {
            let size = board.len();
            on_event(Event::Solving { board: &board });

            let invocation = solver
                .solve(&board, self.player)
                .map_err(|source| SweepError::Launch { size, source })?;

            if !invocation.stderr.is_empty() {
                on_event(Event::Diagnostics {
                    size,
                    stderr: &invocation.stderr,
                });
            }

            let record = Record::new(size, invocation.stdout);
            self.results
                .append(&record)
                .map_err(|source| SweepError::Append { size, source })?;
            appended += 1;

            on_event(Event::Appended {
                record: &record,
                status: invocation.status,
            });
        }

        Ok(appended)
    }
}
