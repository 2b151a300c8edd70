use std::cmp::Ordering;
use std::mem::MaybeUninit;
use std::ptr;

use crate::error::SortError;

sort_impl!("rust_merge_stable");

/// Sorts the slice with top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// The range `[l, r]` is split at `m = l + (r - l) / 2` into `[l, m]` and `[m + 1, r]`, both
/// halves are sorted recursively and then merged. A single scratch buffer of `ceil(len / 2)`
/// elements is allocated up front and reused by every merge, it only ever holds a copy of the
/// left run.
///
/// If the allocation fails the global allocation error handler runs, see [`try_sort`] for a
/// fallible version.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Like [`sort`], but reports a failed scratch allocation instead of aborting.
///
/// `v` is left untouched if the allocation fails.
#[inline]
pub fn try_sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    try_merge_sort(v, &mut |a: &T, b: &T| a.lt(b))
}

/// Like [`sort_by`], but reports a failed scratch allocation instead of aborting.
#[inline]
pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_merge_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less)
}

/// Number of scratch elements needed to sort a slice of `len` elements.
pub fn scratch_len(len: usize) -> usize {
    left_len(len)
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let mut scratch: Vec<T> = Vec::with_capacity(scratch_len(v.len()));
    merge_sort_range(v, scratch.spare_capacity_mut(), is_less);
}

fn try_merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return Ok(());
    }

    let elements = scratch_len(v.len());
    let mut scratch: Vec<T> = Vec::new();
    scratch
        .try_reserve_exact(elements)
        .map_err(|_| SortError::OutOfMemory { elements })?;

    merge_sort_range(v, scratch.spare_capacity_mut(), is_less);

    Ok(())
}

/// Length of `[0, m]` for `m = (len - 1) / 2`. Never smaller than the right half.
#[inline]
fn left_len(len: usize) -> usize {
    len - len / 2
}

fn merge_sort_range<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = left_len(len);

    merge_sort_range(&mut v[..mid], scratch, is_less);
    merge_sort_range(&mut v[mid..], scratch, is_less);

    merge(v, mid, scratch, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `scratch` as temporary storage,
/// and stores the result into `v[..]`.
///
/// On equal elements the one from the left run is taken first, which keeps the merge stable.
fn merge<T, F>(v: &mut [T], mid: usize, scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if mid == 0 || mid >= len {
        return;
    }

    debug_assert!(mid <= scratch.len());

    // SAFETY: `mid < len` and `scratch` holds at least `mid` elements, `merge_sort_range` only
    // ever splits slices no longer than the one `scratch_len` was computed for.
    // The left run is copied out first and only read from `buf` afterwards. `state.dest` always
    // trails the right run read position by exactly the number of unmerged left elements, so a
    // write never overwrites an unread right element and source and destination never overlap.
    // Every element lives in exactly one place at every point where `is_less` may panic, and
    // `MergeState` moves the unmerged rest of the left run back into the gap when dropped.
    unsafe {
        let v_base = v.as_mut_ptr();
        let buf = scratch.as_mut_ptr() as *mut T;

        ptr::copy_nonoverlapping(v_base, buf, mid);

        let mut state = MergeState {
            buf,
            left: 0,
            left_end: mid,
            dest: v_base,
        };
        let mut right = mid;

        while state.left < state.left_end && right < len {
            let right_elem = v_base.add(right);
            let left_elem = buf.add(state.left);

            let take_right = is_less(&*right_elem, &*left_elem);
            let src = if take_right { right_elem } else { left_elem };

            ptr::copy_nonoverlapping(src, state.dest, 1);
            state.dest = state.dest.add(1);

            if take_right {
                right += 1;
            } else {
                state.left += 1;
            }
        }

        // If the right run ran out first, `state` copies the remaining left run to the end of
        // `v`. If the left run ran out first, the remaining right run already is in place.
    }

    // Indices instead of pointer ranges keep this correct for zero-sized types.
    struct MergeState<T> {
        buf: *mut T,
        left: usize,
        left_end: usize,
        dest: *mut T,
    }

    impl<T> Drop for MergeState<T> {
        fn drop(&mut self) {
            // SAFETY: `buf[left..left_end]` holds the initialized unmerged part of the left run
            // and `dest` points at a gap of exactly `left_end - left` elements in `v`.
            unsafe {
                ptr::copy_nonoverlapping(
                    self.buf.add(self.left),
                    self.dest,
                    self.left_end - self.left,
                );
            }
        }
    }
}
