//! Contains the index-based implementation of [partition refinement].
//!
//! [partition refinement]: https://en.wikipedia.org/wiki/Partition_refinement

mod metadata;
pub mod refine_vec;
