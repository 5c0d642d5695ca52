//! The pentagon: five complex vertices and the currently selected move.

use super::adjacency::VERTEX_COUNT;
use super::error::PentagonError;
use super::moves::{transition, Direction, MoveType, Vertices};
use super::state_key::StateKey;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Configuration every new pentagon starts from.
pub const INITIAL_VERTICES: Vertices = [
    Complex64::new(2.0, 4.0),
    Complex64::new(2.0, 0.0),
    Complex64::new(2.0, 2.0),
    Complex64::new(3.0, 4.0),
    Complex64::new(1.0, 3.0),
];

/// Largest per-vertex distance (exclusive) at which two values match.
pub const WIN_TOLERANCE: f64 = 0.001;

/// Puzzle state: the vertex vector and the current move type.
///
/// Vertex positions are fixed; only their values change, either through
/// [`Pentagon::apply_move`] or a wholesale [`Pentagon::set_configuration`].
///
/// # Example
///
/// ```rust
/// use pentagon::core::{Direction, Pentagon};
/// use pentagon::Complex64;
///
/// let mut pentagon = Pentagon::new();
/// pentagon.select_move_type("A").unwrap();
/// let before = pentagon.apply_move(0, Direction::Forward).unwrap();
///
/// assert_eq!(pentagon.vertices()[0], Complex64::new(3.0, 5.0));
///
/// // Undo by restoring the returned configuration
/// pentagon.set_vertices(before);
/// assert!(pentagon.check_win(&before).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pentagon {
    vertices: Vertices,
    current_move: MoveType,
    win_tolerance: f64,
}

impl Default for Pentagon {
    fn default() -> Self {
        Self::new()
    }
}

impl Pentagon {
    /// Create a pentagon in the initial configuration with move A selected.
    pub fn new() -> Self {
        Self::with_vertices(INITIAL_VERTICES)
    }

    /// Create a pentagon holding `vertices` with move A selected.
    pub fn with_vertices(vertices: Vertices) -> Self {
        Self {
            vertices,
            current_move: MoveType::default(),
            win_tolerance: WIN_TOLERANCE,
        }
    }

    pub(crate) fn from_parts(vertices: Vertices, current_move: MoveType, win_tolerance: f64) -> Self {
        Self {
            vertices,
            current_move,
            win_tolerance,
        }
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    pub fn current_move(&self) -> MoveType {
        self.current_move
    }

    pub fn win_tolerance(&self) -> f64 {
        self.win_tolerance
    }

    /// Select the move applied by subsequent [`Pentagon::apply_move`] calls.
    ///
    /// Fails with [`PentagonError::InvalidMoveType`] for any tag other than
    /// `A`, `B`, `C` or `D`; the current move is left unchanged.
    pub fn select_move_type(&mut self, tag: &str) -> Result<(), PentagonError> {
        self.set_move_type(tag.parse()?);
        Ok(())
    }

    pub fn set_move_type(&mut self, move_type: MoveType) {
        self.current_move = move_type;
    }

    /// Apply the current move to `index` in `direction`.
    ///
    /// Returns the configuration as it was before the move so callers can
    /// undo by restoring it. An out-of-range index fails with
    /// [`PentagonError::InvalidVertex`] and leaves the vertices untouched.
    pub fn apply_move(&mut self, index: usize, direction: Direction) -> Result<Vertices, PentagonError> {
        let next = transition(&self.vertices, index, self.current_move, direction)?;
        let previous = std::mem::replace(&mut self.vertices, next);
        tracing::debug!(
            vertex = index,
            move_type = %self.current_move,
            direction = %direction,
            "applied move"
        );
        Ok(previous)
    }

    /// Replace the vertex vector wholesale.
    ///
    /// Fails with [`PentagonError::InvalidConfigurationLength`] unless
    /// `values` holds exactly five numbers, and with
    /// [`PentagonError::NonFiniteValue`] if any component is NaN or infinite.
    /// The pentagon is unchanged on failure.
    pub fn set_configuration(&mut self, values: &[Complex64]) -> Result<(), PentagonError> {
        let vertices: Vertices =
            values
                .try_into()
                .map_err(|_| PentagonError::InvalidConfigurationLength {
                    expected: VERTEX_COUNT,
                    found: values.len(),
                })?;
        if let Some(vertex) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PentagonError::NonFiniteValue { vertex });
        }
        self.set_vertices(vertices);
        Ok(())
    }

    /// Replace the vertex vector with one whose length is already known.
    pub fn set_vertices(&mut self, vertices: Vertices) {
        tracing::debug!(from = %self.state_key(), to = %StateKey::from_vertices(&vertices), "configuration replaced");
        self.vertices = vertices;
    }

    /// Whether every vertex is strictly within the win tolerance of `goal`.
    ///
    /// A goal whose length is not five fails with
    /// [`PentagonError::GoalLengthMismatch`].
    pub fn check_win(&self, goal: &[Complex64]) -> Result<bool, PentagonError> {
        if goal.len() != VERTEX_COUNT {
            return Err(PentagonError::GoalLengthMismatch {
                expected: VERTEX_COUNT,
                found: goal.len(),
            });
        }
        Ok(self
            .vertices
            .iter()
            .zip(goal)
            .all(|(value, target)| (value - target).norm() < self.win_tolerance))
    }

    /// Canonical, rounded identifier of the current configuration.
    pub fn state_key(&self) -> StateKey {
        StateKey::from_vertices(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn new_pentagon_starts_from_initial_configuration() {
        let pentagon = Pentagon::new();
        assert_eq!(
            pentagon.vertices(),
            &[c(2.0, 4.0), c(2.0, 0.0), c(2.0, 2.0), c(3.0, 4.0), c(1.0, 3.0)]
        );
        assert_eq!(pentagon.current_move(), MoveType::A);
        assert_eq!(pentagon.win_tolerance(), 0.001);
    }

    #[test]
    fn move_a_forward_on_vertex_zero() {
        let mut pentagon = Pentagon::new();
        pentagon.select_move_type("A").unwrap();
        pentagon.apply_move(0, Direction::Forward).unwrap();

        assert_eq!(
            pentagon.vertices(),
            &[c(3.0, 5.0), c(1.0, 0.0), c(2.0, 2.0), c(3.0, 4.0), c(0.0, 3.0)]
        );
    }

    #[test]
    fn move_c_reverse_after_move_a() {
        let mut pentagon = Pentagon::new();
        pentagon.apply_move(0, Direction::Forward).unwrap();
        pentagon.select_move_type("C").unwrap();
        pentagon.apply_move(0, Direction::Reverse).unwrap();

        assert_eq!(
            pentagon.vertices(),
            &[c(2.0, 6.0), c(0.0, 0.0), c(2.0, 2.0), c(3.0, 4.0), c(-1.0, 3.0)]
        );
    }

    #[test]
    fn apply_move_returns_previous_configuration() {
        let mut pentagon = Pentagon::new();
        pentagon.set_move_type(MoveType::D);
        let before = pentagon.apply_move(3, Direction::Forward).unwrap();

        assert_eq!(before, INITIAL_VERTICES);
        assert_ne!(pentagon.vertices(), &INITIAL_VERTICES);
    }

    #[test]
    fn forward_then_reverse_restores_configuration() {
        for move_type in MoveType::ALL {
            for index in 0..VERTEX_COUNT {
                let mut pentagon = Pentagon::new();
                pentagon.set_move_type(move_type);
                pentagon.apply_move(index, Direction::Forward).unwrap();
                pentagon.apply_move(index, Direction::Reverse).unwrap();
                assert_eq!(pentagon.vertices(), &INITIAL_VERTICES, "{move_type} on {index}");
            }
        }
    }

    #[test]
    fn invalid_move_type_keeps_current_move() {
        let mut pentagon = Pentagon::new();
        pentagon.set_move_type(MoveType::B);

        let err = pentagon.select_move_type("E").unwrap_err();

        assert_eq!(err, PentagonError::InvalidMoveType { tag: "E".into() });
        assert_eq!(pentagon.current_move(), MoveType::B);
    }

    #[test]
    fn invalid_vertex_leaves_vertices_untouched() {
        let mut pentagon = Pentagon::new();

        let err = pentagon.apply_move(5, Direction::Forward).unwrap_err();

        assert_eq!(err, PentagonError::InvalidVertex { index: 5, max: 4 });
        assert_eq!(pentagon.vertices(), &INITIAL_VERTICES);
    }

    #[test]
    fn set_configuration_requires_five_values() {
        let mut pentagon = Pentagon::new();

        for len in [0, 4, 6] {
            let values = vec![c(0.0, 0.0); len];
            assert_eq!(
                pentagon.set_configuration(&values),
                Err(PentagonError::InvalidConfigurationLength {
                    expected: 5,
                    found: len
                })
            );
        }
        assert_eq!(pentagon.vertices(), &INITIAL_VERTICES);

        let zeros = [c(0.0, 0.0); 5];
        pentagon.set_configuration(&zeros).unwrap();
        assert_eq!(pentagon.vertices(), &zeros);
    }

    #[test]
    fn set_configuration_rejects_non_finite_values() {
        let mut pentagon = Pentagon::new();

        let nans = [c(f64::NAN, f64::NAN); 5];
        assert_eq!(
            pentagon.set_configuration(&nans),
            Err(PentagonError::NonFiniteValue { vertex: 0 })
        );

        let mut values = [c(0.0, 0.0); 5];
        values[3] = c(0.0, f64::INFINITY);
        assert_eq!(
            pentagon.set_configuration(&values),
            Err(PentagonError::NonFiniteValue { vertex: 3 })
        );

        assert_eq!(pentagon.vertices(), &INITIAL_VERTICES);
        assert_ne!(pentagon.state_key(), StateKey::from_vertices(&[c(0.0, 0.0); 5]));
    }

    #[test]
    fn check_win_against_itself() {
        let pentagon = Pentagon::new();
        assert!(pentagon.check_win(pentagon.vertices()).unwrap());
    }

    #[test]
    fn check_win_fails_after_any_single_move() {
        for move_type in MoveType::ALL {
            for index in 0..VERTEX_COUNT {
                for direction in [Direction::Forward, Direction::Reverse] {
                    let mut pentagon = Pentagon::new();
                    pentagon.set_move_type(move_type);
                    pentagon.apply_move(index, direction).unwrap();
                    assert!(!pentagon.check_win(&INITIAL_VERTICES).unwrap());
                }
            }
        }
    }

    #[test]
    fn check_win_tolerance_is_strict() {
        let mut pentagon = Pentagon::new();
        pentagon.set_vertices([c(0.0, 0.0); 5]);

        let mut near = [c(0.0, 0.0); 5];
        near[2] = c(0.0009, 0.0);
        assert!(pentagon.check_win(&near).unwrap());

        near[2] = c(0.002, 0.0);
        assert!(!pentagon.check_win(&near).unwrap());
    }

    #[test]
    fn check_win_rejects_mismatched_goal_length() {
        let pentagon = Pentagon::new();
        assert_eq!(
            pentagon.check_win(&INITIAL_VERTICES[..4]),
            Err(PentagonError::GoalLengthMismatch {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn pentagon_serializes_correctly() {
        let mut pentagon = Pentagon::new();
        pentagon.set_move_type(MoveType::C);

        let json = serde_json::to_string(&pentagon).unwrap();
        let deserialized: Pentagon = serde_json::from_str(&json).unwrap();

        assert_eq!(pentagon, deserialized);
    }
}
