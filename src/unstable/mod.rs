// Quicksort with Lomuto partitioning around the last element.
pub mod rust_quick;

// Selection sort, one exchange per boundary index.
pub mod rust_selection;
