use std::cmp::Ordering;

sort_impl!("rust_quick_unstable");

/// Sorts the slice with quicksort, always pivoting on the last element of a range.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case. Ascending and descending inputs
/// hit the worst case, a slice of `n` such elements costs `n * (n - 1) / 2` comparisons.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts `v` recursively.
///
/// The shorter side of each partition is sorted with a recursive call and the longer side with
/// the next loop iteration, which bounds the stack depth to *O*(log(*n*)). The ranges are
/// disjoint, so each one sees the same partitions and comparisons as with two recursive calls.
fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition_lomuto(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let (_pivot, right) = right.split_at_mut(1);

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Takes the last element of `v` as pivot and moves every element that compares true for
/// `is_less(elem, pivot)` to the front, in scan order. The pivot is then exchanged into the slot
/// right after them.
///
/// Returns the final position of the pivot, which equals the number of elements less than it.
fn partition_lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let Some((pivot, rest)) = v.split_last_mut() else {
        return 0;
    };

    let mut num_lt = 0;
    for i in 0..rest.len() {
        if is_less(&rest[i], pivot) {
            rest.swap(num_lt, i);
            num_lt += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(num_lt, len - 1);

    num_lt
}
