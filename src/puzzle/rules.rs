//! Validation rules for puzzle definitions.
//!
//! Every rule runs on every call; the result carries all violations at
//! once rather than stopping at the first.

use crate::core::{Pentagon, Vertices, VERTEX_COUNT};
use crate::puzzle::goal::PuzzleGoal;
use crate::puzzle::violations::PuzzleViolation;
use crate::puzzle::Puzzle;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<PuzzleViolation>>;

fn require(ok: bool, violation: PuzzleViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

fn finite_values<F>(values: &[num_complex::Complex64], violation: F) -> Vec<Check>
where
    F: Fn(usize) -> PuzzleViolation,
{
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_finite())
        .map(|(vertex, _)| Validation::fail(violation(vertex)))
        .collect()
}

/// Validate a puzzle, accumulating ALL violations.
pub fn validate(puzzle: &Puzzle) -> Check {
    let mut checks: Vec<Check> = vec![
        require(!puzzle.id.trim().is_empty(), PuzzleViolation::MissingId),
        require(!puzzle.name.trim().is_empty(), PuzzleViolation::MissingName),
        require(puzzle.par > 0, PuzzleViolation::ZeroPar),
        require(
            puzzle.start_state.len() == VERTEX_COUNT,
            PuzzleViolation::StartLength {
                found: puzzle.start_state.len(),
            },
        ),
    ];

    checks.extend(finite_values(&puzzle.start_state, |vertex| {
        PuzzleViolation::NonFiniteStart { vertex }
    }));

    match &puzzle.goal {
        PuzzleGoal::Target { vertices } => {
            checks.push(require(
                vertices.len() == VERTEX_COUNT,
                PuzzleViolation::GoalLength {
                    found: vertices.len(),
                },
            ));
            checks.extend(finite_values(vertices, |vertex| {
                PuzzleViolation::NonFiniteGoal { vertex }
            }));
        }
        PuzzleGoal::NiceRepresentative { distinguished } => {
            checks.push(require(
                *distinguished < VERTEX_COUNT,
                PuzzleViolation::GoalVertexOutOfRange {
                    vertex: *distinguished,
                },
            ));
        }
        PuzzleGoal::AllZeros => {}
    }

    // Only meaningful once the start state and goal are usable.
    if let (Ok(start), Ok(goal)) = (
        Vertices::try_from(puzzle.start_state.as_slice()),
        puzzle.goal.to_goal(),
    ) {
        if let Ok(solved) = goal.is_met(&Pentagon::with_vertices(start)) {
            checks.push(require(!solved, PuzzleViolation::AlreadySolved));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
