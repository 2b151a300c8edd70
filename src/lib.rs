macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod config;
pub mod error;
pub mod identity;
pub mod shim;
pub mod stable;
pub mod unstable;

pub use algorithm::Algorithm;
pub use config::{GenConfig, RunConfig};
pub use error::{ShimError, SortError};
