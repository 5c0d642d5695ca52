//! Win conditions for a pentagon.
//!
//! A goal is either an explicit target configuration or one of the
//! structural conditions used by puzzle levels. Every comparison uses the
//! pentagon's win tolerance.

use crate::core::{check_vertex, Pentagon, PentagonError, Vertices};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Condition a pentagon must satisfy to be solved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Every vertex matches the target configuration.
    Target { vertices: Vertices },

    /// Every vertex is zero.
    AllZeros,

    /// Every value is real, the distinguished vertex holds 0 or 3 and every
    /// other vertex holds 0, 1 or 2.
    NiceRepresentative { distinguished: usize },
}

impl Goal {
    /// Whether `pentagon` currently satisfies this goal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pentagon::core::Pentagon;
    /// use pentagon::goal::Goal;
    /// use pentagon::vertices;
    ///
    /// let pentagon = Pentagon::with_vertices(vertices![(3, 0), (1, 0), (0, 0), (2, 0), (2, 0)]);
    ///
    /// assert!(Goal::NiceRepresentative { distinguished: 0 }.is_met(&pentagon).unwrap());
    /// assert!(!Goal::AllZeros.is_met(&pentagon).unwrap());
    /// ```
    pub fn is_met(&self, pentagon: &Pentagon) -> Result<bool, PentagonError> {
        match self {
            Self::Target { vertices } => pentagon.check_win(vertices),
            Self::AllZeros => Ok(all_zeros(pentagon.vertices(), pentagon.win_tolerance())),
            Self::NiceRepresentative { distinguished } => nice_representative(
                pentagon.vertices(),
                *distinguished,
                pentagon.win_tolerance(),
            ),
        }
    }

    /// Check that the goal can be evaluated at all.
    pub fn validate(&self) -> Result<(), PentagonError> {
        match self {
            Self::NiceRepresentative { distinguished } => check_vertex(*distinguished).map(|_| ()),
            Self::Target { .. } | Self::AllZeros => Ok(()),
        }
    }
}

fn near(value: Complex64, target: Complex64, tolerance: f64) -> bool {
    (value - target).norm() < tolerance
}

fn near_any(value: Complex64, reals: &[f64], tolerance: f64) -> bool {
    reals
        .iter()
        .any(|&re| near(value, Complex64::new(re, 0.0), tolerance))
}

fn all_zeros(vertices: &Vertices, tolerance: f64) -> bool {
    vertices
        .iter()
        .all(|&v| near(v, Complex64::new(0.0, 0.0), tolerance))
}

fn nice_representative(
    vertices: &Vertices,
    distinguished: usize,
    tolerance: f64,
) -> Result<bool, PentagonError> {
    let distinguished = check_vertex(distinguished)?;
    Ok(vertices.iter().enumerate().all(|(vertex, &value)| {
        if vertex == distinguished {
            near_any(value, &[0.0, 3.0], tolerance)
        } else {
            near_any(value, &[0.0, 1.0, 2.0], tolerance)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, INITIAL_VERTICES};
    use crate::vertices;

    #[test]
    fn target_goal_uses_check_win() {
        let mut pentagon = Pentagon::new();
        let goal = Goal::Target {
            vertices: INITIAL_VERTICES,
        };
        assert!(goal.is_met(&pentagon).unwrap());

        pentagon.apply_move(1, Direction::Forward).unwrap();
        assert!(!goal.is_met(&pentagon).unwrap());
    }

    #[test]
    fn all_zeros_goal() {
        let mut pentagon = Pentagon::with_vertices([Complex64::new(0.0, 0.0); 5]);
        assert!(Goal::AllZeros.is_met(&pentagon).unwrap());

        pentagon.set_vertices(vertices![(0, 0), (0, 0), (0, 1), (0, 0), (0, 0)]);
        assert!(!Goal::AllZeros.is_met(&pentagon).unwrap());
    }

    #[test]
    fn nice_representative_accepts_valid_chip_counts() {
        let pentagon = Pentagon::with_vertices(vertices![(1, 0), (0, 0), (0, 0), (2, 0), (3, 0)]);

        assert!(Goal::NiceRepresentative { distinguished: 4 }
            .is_met(&pentagon)
            .unwrap());
        assert!(!Goal::NiceRepresentative { distinguished: 0 }
            .is_met(&pentagon)
            .unwrap());
    }

    #[test]
    fn nice_representative_rejects_imaginary_parts() {
        let pentagon = Pentagon::with_vertices(vertices![(0, 0), (1, 1), (0, 0), (0, 0), (0, 0)]);
        assert!(!Goal::NiceRepresentative { distinguished: 0 }
            .is_met(&pentagon)
            .unwrap());
    }

    #[test]
    fn nice_representative_rejects_out_of_range_vertex() {
        let pentagon = Pentagon::new();
        let goal = Goal::NiceRepresentative { distinguished: 9 };

        assert_eq!(
            goal.is_met(&pentagon),
            Err(PentagonError::InvalidVertex { index: 9, max: 4 })
        );
        assert!(goal.validate().is_err());
        assert!(Goal::AllZeros.validate().is_ok());
    }

    #[test]
    fn goal_serializes_with_kebab_case_tags() {
        let goal = Goal::NiceRepresentative { distinguished: 2 };
        let json = serde_json::to_string(&goal).unwrap();
        assert_eq!(json, r#"{"nice-representative":{"distinguished":2}}"#);

        let all_zeros: Goal = serde_json::from_str(r#""all-zeros""#).unwrap();
        assert_eq!(all_zeros, Goal::AllZeros);
    }
}
