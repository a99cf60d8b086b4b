//! Attempt evaluation - classifies a drop by horizontal distance to the target
//!
//! Tolerances are fixed; they do not depend on the combo or the stack height.

use crate::types::{Attempt, ACCEPTABLE_TOLERANCE, PERFECT_TOLERANCE};

/// Classify a drop released at `crane_x` against `target_x`.
///
/// Symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use tower_crane_core::classify;
/// use tower_crane_core::types::Attempt;
///
/// assert_eq!(classify(400, 400), Attempt::Perfect);
/// assert_eq!(classify(435, 400), Attempt::Acceptable);
/// assert_eq!(classify(480, 400), Attempt::Miss);
/// ```
pub fn classify(crane_x: i32, target_x: i32) -> Attempt {
    classify_distance(distance(crane_x, target_x))
}

/// Classify an absolute distance.
pub fn classify_distance(d: u32) -> Attempt {
    if d <= PERFECT_TOLERANCE as u32 {
        Attempt::Perfect
    } else if d <= ACCEPTABLE_TOLERANCE as u32 {
        Attempt::Acceptable
    } else {
        Attempt::Miss
    }
}

/// `|a - b|` without overflow
pub fn distance(a: i32, b: i32) -> u32 {
    a.abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_edges() {
        assert_eq!(classify_distance(0), Attempt::Perfect);
        assert_eq!(classify_distance(20), Attempt::Perfect);
        assert_eq!(classify_distance(21), Attempt::Acceptable);
        assert_eq!(classify_distance(50), Attempt::Acceptable);
        assert_eq!(classify_distance(51), Attempt::Miss);
    }

    #[test]
    fn test_both_sides_of_target() {
        assert_eq!(classify(380, 400), Attempt::Perfect);
        assert_eq!(classify(420, 400), Attempt::Perfect);
        assert_eq!(classify(365, 400), Attempt::Acceptable);
        assert_eq!(classify(435, 400), Attempt::Acceptable);
        assert_eq!(classify(320, 400), Attempt::Miss);
        assert_eq!(classify(480, 400), Attempt::Miss);
    }

    #[test]
    fn test_symmetric() {
        for c in (150..650).step_by(7) {
            assert_eq!(classify(c, 400), classify(400, c));
        }
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(classify(i32::MIN, i32::MAX), Attempt::Miss);
        assert_eq!(distance(i32::MIN, i32::MAX), u32::MAX);
    }
}
