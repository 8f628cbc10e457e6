#![cfg(unix)]

use std::fs;
use strip_sweep::{
    results::ResultsLog,
    solver::ExternalSolver,
    sweep::{DEFAULT_PLAYER, DEFAULT_RESULTS_PATH, DEFAULT_SIZES, Sweep, SweepError},
};
use tempfile::tempdir;

fn expected_blocks() -> String {
    DEFAULT_SIZES
        .map(|size| format!("boardsize: 1x{size}\n.x{} w\n\n", ".".repeat(size - 2)))
        .collect()
}

#[test]
fn echo_solver_sweep() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_RESULTS_PATH);
    let sweep = Sweep::new(DEFAULT_SIZES, DEFAULT_PLAYER, ResultsLog::new(&path)).unwrap();
    let solver = ExternalSolver::new("echo");

    let mut solved = Vec::new();
    let appended = sweep
        .run(&solver, |event| {
            if let strip_sweep::sweep::Event::Appended { record, status } = event {
                assert!(status.success());
                solved.push(record.size());
            }
        })
        .unwrap();

    assert_eq!(appended, 24);
    assert_eq!(solved, DEFAULT_SIZES.collect::<Vec<_>>());
    assert_eq!(fs::read_to_string(&path).unwrap(), expected_blocks());

    sweep.run(&solver, |_| {}).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        expected_blocks().repeat(2)
    );
}

#[test]
fn missing_solver_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_RESULTS_PATH);
    let sweep = Sweep::new(DEFAULT_SIZES, DEFAULT_PLAYER, ResultsLog::new(&path)).unwrap();
    let solver = ExternalSolver::new("./definitely-not-a-strip-solver");

    let mut started = 0;
    let err = sweep
        .run(&solver, |event| {
            assert!(matches!(event, strip_sweep::sweep::Event::Solving { .. }));
            started += 1;
        })
        .unwrap_err();

    assert!(matches!(err, SweepError::Launch { size: 16, .. }));
    assert_eq!(started, 1);
    assert!(!path.exists());
}
