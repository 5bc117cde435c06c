//! A [partition refinement] implementation that splits the sets of a partition in time
//! proportional to the set it is refined with.
//!
//! A partition refinement structure starts with all elements of a fixed universe in a single set.
//! Refining it with a set `X` replaces every set `S` by `S ∩ X` and `S \ X`.
//! Sets are only ever split, never joined, so repeated refinements make the partition finer.
//! This is the building block of DFA minimization, lexicographic breadth-first search and the
//! recognition of interval graphs.
//!
//! The main struct of this crate is [`RefineVec<T>`], which addresses the elements by the index
//! they had in the universe. [`PartitionRefinement<T>`] wraps it with a hash map so that the
//! elements themselves can be used in queries.
//!
//! All elements are kept in a single dense storage where every set occupies a contiguous range.
//! For each element we store the id of its set and its position in the storage.
//! Moving an element to a new set swaps it with the element just past the range of that set,
//! so `refine` never looks at sets that do not contain an element of the query.
//!
//! ```
//! use partition_refinement::PartitionRefinement;
//!
//! let mut partition: PartitionRefinement<u32> = PartitionRefinement::new(0 .. 10).unwrap();
//! partition.refine(&[2, 3, 5, 7]).unwrap();
//! partition.refine(&[0, 2, 4, 6, 8]).unwrap();
//!
//! let mut sets = partition.collect_sets();
//! for set in &mut sets {
//!     set.sort();
//! }
//! sets.sort();
//!
//! assert!(sets == vec![vec![0, 4, 6, 8], vec![1, 9], vec![2], vec![3, 5, 7]]);
//! ```
//!
//! The crate has two features, both enabled by default:
//! `rayon` to build a [`RefineVec<T>`] from a parallel iterator and
//! `proptest` for an `Arbitrary` implementation of [`RefineVec<T>`].
//!
//! [partition refinement]: https://en.wikipedia.org/wiki/Partition_refinement
//! [`RefineVec<T>`]: refinement/refine_vec/struct.RefineVec.html
//! [`PartitionRefinement<T>`]: struct.PartitionRefinement.html

extern crate bit_vec;
#[cfg(feature = "rayon")]
extern crate rayon;

mod error;
pub mod refinement;
mod partition_refinement;

pub use {
    error::Error,
    refinement::refine_vec::{
        RefineVec,
        Split,
    },
    partition_refinement::PartitionRefinement,
};
