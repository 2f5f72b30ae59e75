pub trait Monoid {
    fn identity() -> Self;
    fn combine(self, other: Self) -> Self;
}

impl Monoid for u64 {
    fn identity() -> Self {
        0
    }
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl Monoid for i64 {
    fn identity() -> Self {
        0
    }
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

/// Fold any number of elements with [Monoid::combine], starting from [Monoid::identity].
pub fn combine_all<M, I>(elems: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    elems.into_iter().fold(M::identity(), M::combine)
}

#[cfg(test)]
mod tests {
    use crate::monoid::{combine_all, Monoid};

    #[test]
    fn combine_all_of_nothing_is_identity() {
        assert_eq!(combine_all::<i64, _>(vec![]), i64::identity());
    }

    #[test]
    fn combine_all_sums_signed() {
        assert_eq!(combine_all(vec![10i64, -4, -6, 3]), 3);
    }
}
