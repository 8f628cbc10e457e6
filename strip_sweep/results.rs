//! Plain text results file
//!
//! Every solver run becomes one block:
//!
//! ```text
//! boardsize: 1x<N>
//! <solver stdout>
//!
//! ```
//!
//! Blocks are only ever appended, so repeated sweeps accumulate in the same file.

use std::{
    fmt::{self, Display},
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Single block of the results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    size: usize,
    stdout: String,
}

impl Record {
    /// Create record of solver output for board of width `size`
    pub const fn new(size: usize, stdout: String) -> Self {
        Self { size, stdout }
    }

    /// Board width
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Header line, without the line break
    pub fn header(&self) -> String {
        format!("boardsize: 1x{}", self.size)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.stdout)
    }
}

/// Append-only results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Results file at `path`. Nothing is created until the first append.
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    /// Path to the results file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append record at the end of the file, creating it if needed. The file is closed before
    /// returning.
    ///
    /// # Errors
    /// - File could not be opened or written
    pub fn append(&self, record: &Record) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Whole block in a single write
        file.write_all(record.to_string().as_bytes())?;
        file.flush()
    }
}

impl Display for ResultsLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
