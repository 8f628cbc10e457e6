//! Running the solver on a single position

use crate::{board::Strip, player::Player};
use std::{
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

/// Output captured from one solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Everything the solver printed on standard output
    pub stdout: String,

    /// Everything the solver printed on standard error
    pub stderr: String,

    /// How the solver process ended
    pub status: ExitStatus,
}

/// Something that can evaluate a position with a given player to move
pub trait Solve {
    /// Solve `board` with `player` to move. Blocks until the solver is done.
    ///
    /// # Errors
    /// - Solver could not be started or awaited
    fn solve(&self, board: &Strip, player: Player) -> io::Result<Invocation>;
}

/// Solver executable invoked as `<path> <board> <player>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSolver {
    path: PathBuf,
}

impl ExternalSolver {
    /// Create solver that runs the executable at `path`
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    /// Path to the solver executable
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn command(&self, board: &Strip, player: Player) -> Command {
        let mut command = Command::new(&self.path);
        command.arg(board.to_string()).arg(player.to_string());
        command
    }
}

impl Display for ExternalSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl Solve for ExternalSolver {
    fn solve(&self, board: &Strip, player: Player) -> io::Result<Invocation> {
        let output = self.command(board, player).output()?;

        Ok(Invocation {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::DEFAULT_SOLVER;
    use std::ffi::OsStr;

    #[test]
    fn passes_board_and_player() {
        let solver = ExternalSolver::new(DEFAULT_SOLVER);
        assert_eq!(solver.path(), Path::new("./solver_main"));

        let command = solver.command(&Strip::opening(16).unwrap(), Player::White);
        assert_eq!(command.get_program(), OsStr::new("./solver_main"));
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new(".x.............."), OsStr::new("w")]
        );
    }

    #[test]
    fn missing_executable() {
        let solver = ExternalSolver::new("./no-such-strip-solver");
        let err = solver
            .solve(&Strip::opening(16).unwrap(), Player::White)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    #[cfg(unix)]
    fn captures_stdout() {
        let solver = ExternalSolver::new("echo");
        let invocation = solver
            .solve(&Strip::opening(4).unwrap(), Player::Black)
            .unwrap();

        assert_eq!(invocation.stdout, ".x.. b\n");
        assert!(invocation.stderr.is_empty());
        assert!(invocation.status.success());
    }

    #[test]
    #[cfg(unix)]
    fn captures_stderr() {
        // `ls` complains on stderr about the board not being a file
        let solver = ExternalSolver::new("ls");
        let invocation = solver
            .solve(&Strip::opening(5).unwrap(), Player::White)
            .unwrap();

        assert!(!invocation.stderr.is_empty());
        assert!(!invocation.status.success());
    }
}
