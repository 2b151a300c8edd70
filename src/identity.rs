//! The control "sort". Leaves the buffer as it is, which isolates the cost of reading and
//! printing from the cost of sorting.

use std::cmp::Ordering;

sort_impl!("rust_identity_control");

#[inline]
pub fn sort<T>(_v: &mut [T])
where
    T: Ord,
{
}

#[inline]
pub fn sort_by<T, F>(_v: &mut [T], _compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
}
