// Insertion sort, shifts greater predecessors right.
pub mod rust_insertion;

// Top-down merge sort with a single reusable scratch buffer.
pub mod rust_merge;
