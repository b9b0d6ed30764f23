use std::cmp::Ordering;

use crate::Nothing;
use crate::Optional::{self, Absent, Present};

/// two present values compare their contents, two absent values are equal
impl<T: PartialEq> PartialEq for Optional<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Present(l), Present(r)) => *l == *r,
            (Absent, Absent) => true,
            _ => false,
        }
    }
}

/// true when absent, `T` is never compared
impl<T> PartialEq<Nothing> for Optional<T> {
    #[inline]
    fn eq(&self, _: &Nothing) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<Optional<T>> for Nothing {
    #[inline]
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_none()
    }
}

/// absent sorts before any present value
impl<T: PartialOrd> PartialOrd for Optional<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Present(l), Present(r)) => l.partial_cmp(r),
            (l, r) => Some(l.is_some().cmp(&r.is_some())),
        }
    }
}

impl<T: Ord> Ord for Optional<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Present(l), Present(r)) => l.cmp(r),
            (l, r) => l.is_some().cmp(&r.is_some()),
        }
    }
}
