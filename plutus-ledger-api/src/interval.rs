use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalBoundType {
    NegativeInfinity,
    Finite(i64),
    PositiveInfinity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalBound {
    pub bound_type: IntervalBoundType,
    pub is_inclusive: bool,
}

impl IntervalBound {
    fn inclusive(bound_type: IntervalBoundType) -> Self {
        Self {
            bound_type,
            is_inclusive: true,
        }
    }

    fn exclusive(bound_type: IntervalBoundType) -> Self {
        Self {
            bound_type,
            is_inclusive: false,
        }
    }
}

/// Time interval in POSIX milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub lower_bound: IntervalBound,
    pub upper_bound: IntervalBound,
}

pub type ValidityRange = Interval;

impl Interval {
    /// `(-inf, +inf)`
    pub fn everything() -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::NegativeInfinity),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::PositiveInfinity),
        }
    }

    /// Contains nothing: lower bound at `+inf`, upper at `-inf`.
    pub fn empty() -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::PositiveInfinity),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::NegativeInfinity),
        }
    }

    /// `[from, +inf)`
    pub fn after(from: i64) -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::Finite(from)),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::PositiveInfinity),
        }
    }

    /// `(from, +inf)`
    pub fn entirely_after(from: i64) -> Self {
        Self {
            lower_bound: IntervalBound::exclusive(IntervalBoundType::Finite(from)),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::PositiveInfinity),
        }
    }

    /// `(-inf, to]`
    pub fn before(to: i64) -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::NegativeInfinity),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::Finite(to)),
        }
    }

    /// `(-inf, to)`
    pub fn entirely_before(to: i64) -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::NegativeInfinity),
            upper_bound: IntervalBound::exclusive(IntervalBoundType::Finite(to)),
        }
    }

    /// `[lower, upper]`
    pub fn between(lower: i64, upper: i64) -> Self {
        Self {
            lower_bound: IntervalBound::inclusive(IntervalBoundType::Finite(lower)),
            upper_bound: IntervalBound::inclusive(IntervalBoundType::Finite(upper)),
        }
    }

    /// `(lower, upper)`
    pub fn entirely_between(lower: i64, upper: i64) -> Self {
        Self {
            lower_bound: IntervalBound::exclusive(IntervalBoundType::Finite(lower)),
            upper_bound: IntervalBound::exclusive(IntervalBoundType::Finite(upper)),
        }
    }

    pub fn contains(&self, point: i64) -> bool {
        let above_lower = match self.lower_bound.bound_type {
            IntervalBoundType::NegativeInfinity => true,
            IntervalBoundType::Finite(lo) if self.lower_bound.is_inclusive => lo <= point,
            IntervalBoundType::Finite(lo) => lo < point,
            IntervalBoundType::PositiveInfinity => false,
        };
        let below_upper = match self.upper_bound.bound_type {
            IntervalBoundType::PositiveInfinity => true,
            IntervalBoundType::Finite(hi) if self.upper_bound.is_inclusive => point <= hi,
            IntervalBoundType::Finite(hi) => point < hi,
            IntervalBoundType::NegativeInfinity => false,
        };
        above_lower && below_upper
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::everything()
    }
}

#[cfg(test)]
mod tests {
    use crate::interval::Interval;

    #[test]
    fn bounds_inclusiveness() {
        assert!(Interval::after(10).contains(10));
        assert!(!Interval::entirely_after(10).contains(10));
        assert!(Interval::before(10).contains(10));
        assert!(!Interval::entirely_before(10).contains(10));
        assert!(Interval::between(1, 3).contains(3));
        assert!(!Interval::entirely_between(1, 3).contains(1));
        assert!(Interval::entirely_between(1, 3).contains(2));
    }

    #[test]
    fn everything_and_empty() {
        assert!(Interval::everything().contains(i64::MIN));
        assert!(Interval::everything().contains(i64::MAX));
        assert!(!Interval::empty().contains(0));
    }
}
