use std::cmp::Ordering;

sort_impl!("rust_selection_unstable");

/// Sorts the slice with selection sort.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place. It always performs
/// `n * (n - 1) / 2` comparisons and `n - 1` exchanges, independent of the input order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for boundary in 0..len.saturating_sub(1) {
        let min_pos = min_position(&v[boundary..], is_less) + boundary;
        v.swap(boundary, min_pos);
    }
}

/// Position of the first minimum of the non-empty slice `v`.
fn min_position<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_pos = 0;

    for i in 1..v.len() {
        if is_less(&v[i], &v[min_pos]) {
            min_pos = i;
        }
    }

    min_pos
}
