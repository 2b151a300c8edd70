use std::cmp::Ordering;

sort_impl!("rust_insertion_stable");

/// Sorts the slice with insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2) worst-case and
/// *O*(*n*) if the slice is already sorted. It does not allocate.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Grows the sorted prefix `v[..i]` one element at a time, for boundary index `i` in `1..len`.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]`.
///
/// Every predecessor greater than the key moves one slot to the right and the key lands in the
/// vacated slot. Predecessors equal to the key stay in front of it.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(key_pos) = v.len().checked_sub(1) else {
        return;
    };

    let mut hole = key_pos;
    while hole > 0 && is_less(&v[key_pos], &v[hole - 1]) {
        hole -= 1;
    }

    // All comparisons are done before anything moves, a panicking `is_less` leaves `v` as it was.
    v[hole..].rotate_right(1);
}
