//! Experience curve oracle.

/// Maps a level and a random offset to the experience needed to clear that level.
///
/// Implementations must be deterministic, strictly positive, and
/// non-decreasing in `level` for a fixed `offset`. The level-up resolver
/// relies on positivity to terminate.
pub trait ExperienceCurve: Send + Sync {
    fn max_exp(&self, level: u32, offset: u32) -> u32;
}

/// Default curve: `level² × offset + 10 × level`, never below 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardCurve;

impl StandardCurve {
    const LINEAR_TERM: u32 = 10;
}

impl ExperienceCurve for StandardCurve {
    fn max_exp(&self, level: u32, offset: u32) -> u32 {
        let quadratic = level.saturating_mul(level).saturating_mul(offset);
        let linear = level.saturating_mul(Self::LINEAR_TERM);
        quadratic.saturating_add(linear).max(1)
    }
}

/// Curve returning the same value for every level. Handy for tests and tutorials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatCurve(pub u32);

impl ExperienceCurve for FlatCurve {
    fn max_exp(&self, _level: u32, _offset: u32) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_curve_values() {
        let curve = StandardCurve;
        assert_eq!(curve.max_exp(1, 3), 13);
        assert_eq!(curve.max_exp(1, 5), 15);
        assert_eq!(curve.max_exp(2, 4), 36);
        assert_eq!(curve.max_exp(0, 0), 1);
    }

    #[test]
    fn standard_curve_is_non_decreasing() {
        let curve = StandardCurve;
        for offset in 3..=5 {
            let mut previous = 0;
            for level in 1..200 {
                let value = curve.max_exp(level, offset);
                assert!(value > 0);
                assert!(value >= previous);
                previous = value;
            }
        }
    }
}
