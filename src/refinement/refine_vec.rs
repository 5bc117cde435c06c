//! An index-based implementation of [partition refinement].
//!
//! See [`RefineVec<T>`] for more information.
//!
//! [partition refinement]: https://en.wikipedia.org/wiki/Partition_refinement
//! [`RefineVec<T>`]: struct.RefineVec.html

use {
    std::{
        ops,
        fmt,
        hash::Hash,
        collections::hash_map::{self, HashMap},
        iter::{
            FromIterator,
            FusedIterator,
        },
    },
    bit_vec::BitVec,
    crate::{
        Error,
        refinement::metadata::{
            Bounds,
            Metadata,
        },
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [partition refinement] structure over the elements of a vector.
///
/// Most methods that are defined on a slice also work on a `RefineVec`.
/// In addition to this each element stored in the `RefineVec` is a member of a set.
/// Initially all elements share set `0` but sets can be split with the `refine` method.
/// Sets are never joined again.
///
/// Elements are identified by the index they had when the `RefineVec` was constructed,
/// so the values themselves do not have to be distinct.
/// The elements are also kept in a dense storage where every set occupies a contiguous range.
/// Moving an element to another set only swaps two entries of this storage,
/// so `refine` takes time proportional to the amount of indices it is given.
///
/// # Examples
///
/// ```
/// # #[macro_use]
/// # extern crate partition_refinement;
/// #
/// # fn main() {
/// let mut refine_vec = refine_vec!['a', 'b', 'c', 'd'];
/// refine_vec.refine(&[1, 2]).unwrap();
/// refine_vec.refine(&[2, 3]).unwrap();
///
/// assert!(refine_vec.amount_of_sets() == 4);
/// assert!(refine_vec.other_sets(1, 2));
/// assert!(refine_vec.is_singleton(3));
///
/// for (index, &value) in refine_vec.set(refine_vec.set_of(1)) {
///     assert!(index == 1);
///     assert!(value == 'b');
/// }
/// # }
/// ```
///
/// [partition refinement]: https://en.wikipedia.org/wiki/Partition_refinement
#[derive(Clone)]
pub struct RefineVec<T> {
    /// The values in the order they were given, an element is addressed by its index in here.
    data: Vec<T>,
    /// The dense storage, a permutation of the indices where each set is a contiguous range.
    storage: Vec<usize>,
    /// The metadata for each index, this vec will always have the same size as `data`.
    meta: Vec<Metadata>,
    /// The range of `storage` owned by each set, the set id is the index in here.
    bounds: Vec<Bounds>,
    /// Marks the indices of the query that is being checked, all `false` between calls.
    seen: BitVec,
}

/// The outcome of refining a single set.
///
/// Refining the set `difference` with a query moves the query elements it contained to the new
/// set `intersection`, while the elements that were not in the query keep the id `difference`.
/// Either of the two sets can be empty afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Split {
    /// The id of the new set that holds the elements of the query.
    pub intersection: usize,
    /// The id of the original set, which keeps the elements not in the query.
    pub difference: usize,
}

/// Creates a [`RefineVec`] containing the arguments.
///
/// There are three forms of the `refine_vec!` macro:
///
/// - Create a [`RefineVec`] containing a given list of elements all in the same set:
///
/// ```
/// # #[macro_use]
/// # extern crate partition_refinement;
/// #
/// # fn main() {
/// let refine_vec = refine_vec!['a', 'b', 'c'];
///
/// assert!(refine_vec[0] == 'a');
/// assert!(refine_vec[1] == 'b');
/// assert!(refine_vec[2] == 'c');
///
/// assert!(refine_vec.amount_of_sets() == 1);
/// # }
/// ```
///
/// - Create a [`RefineVec`] containing a given list of elements in the sets specified:
///
/// ```
/// # #[macro_use]
/// # extern crate partition_refinement;
/// #
/// # fn main() {
/// let refine_vec = refine_vec![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(refine_vec[0] == 'a');
/// assert!(refine_vec[4] == 'e');
///
/// assert!(refine_vec.same_set(0, 4));
/// assert!(refine_vec.same_set(1, 3));
/// assert!(refine_vec.is_singleton(2));
/// # }
/// ```
///
/// You can use any identifiers that implement `Hash` and `Eq`.
/// Elements with the same set identifiers will be placed in the same set.
/// These identifiers will only be used when constructing a [`RefineVec`]
/// and will not be stored further.
///
/// - Create a [`RefineVec`] of a single set from a given element and size:
///
/// ```
/// # #[macro_use]
/// # extern crate partition_refinement;
/// #
/// # fn main() {
/// let refine_vec = refine_vec!['a'; 3];
///
/// assert!(refine_vec.len() == 3);
/// assert!(refine_vec.len_of_set(0) == 3);
/// # }
/// ```
///
/// [`RefineVec`]: refinement/refine_vec/struct.RefineVec.html
#[macro_export]
macro_rules! refine_vec {
    ($elem: expr; $len: expr) => {
        $crate::RefineVec::from_elem($elem, $len)
    };
    ($($elem: expr),* $(,)?) => {
        $crate::RefineVec::from(vec![$($elem),*])
    };
    ($($elem: expr => $set: expr),+ $(,)?) => {
        $crate::RefineVec::from_labeled(vec![$(($elem, $set)),+])
    };
}

impl<T> RefineVec<T> {
    /// Constructs a `RefineVec<T>` of `len` clones of `elem`, all in set `0`.
    #[inline]
    pub fn from_elem(elem: T, len: usize) -> Self where T: Clone {
        Self::from(vec![elem; len])
    }

    /// Constructs a `RefineVec<T>` where the elements with equal labels share a set.
    ///
    /// The sets get their ids in the order their labels first appear,
    /// so the first element is always in set `0`.
    /// This will be done in `O(n)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_refinement::RefineVec;
    ///
    /// let refine_vec = RefineVec::from_labeled(vec![
    ///     ("x", false),
    ///     ("y", true),
    ///     ("z", false),
    /// ]);
    ///
    /// assert!(refine_vec.set_of(0) == 0);
    /// assert!(refine_vec.set_of(1) == 1);
    /// assert!(refine_vec.set_of(2) == 0);
    /// assert!(refine_vec.set_count() == 2);
    /// ```
    pub fn from_labeled<L>(labeled: Vec<(T, L)>) -> Self where L: Hash + Eq {
        let len = labeled.len();
        let mut labels = HashMap::new();
        let mut sizes: Vec<usize> = Vec::new();
        let mut sets = Vec::with_capacity(len);
        let mut data = Vec::with_capacity(len);

        for (value, label) in labeled {
            let next = sizes.len();
            let set = *labels.entry(label).or_insert(next);
            if set == next {
                sizes.push(0);
            }

            sizes[set] += 1;
            sets.push(set);
            data.push(value);
        }

        let mut bounds = Vec::with_capacity(usize::max(sizes.len(), 1));
        let mut begin = 0;
        for size in sizes {
            bounds.push(Bounds::new(begin, begin + size));
            begin += size;
        }
        // Set `0` exists even for an empty universe.
        if bounds.is_empty() {
            bounds.push(Bounds::empty_at(0));
        }

        let mut next_place: Vec<usize> = bounds.iter().map(Bounds::begin).collect();
        let mut storage = vec![0; len];
        let mut meta = Vec::with_capacity(len);
        for (index, set) in sets.into_iter().enumerate() {
            let place = next_place[set];
            next_place[set] += 1;

            storage[place] = index;
            meta.push(Metadata::new(set, place));
        }

        Self {
            data,
            storage,
            meta,
            bounds,
            seen: BitVec::from_elem(len, false),
        }
    }

    /// Splits every set by the elements with the given `indices`.
    ///
    /// Each set `s` that contains at least one of the indices is replaced by
    /// `s ∩ indices`, which gets a new set id, and `s \ indices`, which keeps the id of `s`.
    /// Sets without any of the indices are not touched.
    /// A new id is created even when all elements of `s` are in `indices`,
    /// the id of `s` then refers to an empty set.
    ///
    /// The returned `Split`s are ordered by the first occurrence of their set in `indices`.
    /// This method will be executed in `O(m)` time where `m` is the length of `indices`.
    ///
    /// # Errors
    ///
    /// If an index is out of bounds or occurs twice in `indices`.
    /// The query is checked before anything is moved, so on an error the `RefineVec<T>`
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec![(); 6];
    ///
    /// let splits = refine_vec.refine(&[4, 1, 2]).unwrap();
    /// assert!(splits.len() == 1);
    /// assert!(refine_vec.len_of_set(splits[0].intersection) == 3);
    /// assert!(refine_vec.len_of_set(splits[0].difference) == 3);
    ///
    /// // This splits both sets.
    /// let splits = refine_vec.refine(&[0, 1]).unwrap();
    /// assert!(splits.len() == 2);
    /// assert!(refine_vec.amount_of_sets() == 4);
    ///
    /// assert!(refine_vec.refine(&[3, 3]).is_err());
    /// assert!(refine_vec.refine(&[6]).is_err());
    /// assert!(refine_vec.amount_of_sets() == 4);
    /// # }
    /// ```
    pub fn refine(&mut self, indices: &[usize]) -> Result<Vec<Split>, Error> {
        if let Err(error) = self.check_query(indices) {
            log::debug!("rejected a query of {} elements: {}", indices.len(), error);
            return Err(error)
        }

        let splits = self.split_off(indices);
        log::trace!("refined by {} elements into {} new sets", indices.len(), splits.len());

        Ok(splits)
    }

    /// Checks that every index is in bounds and occurs once.
    fn check_query(&mut self, indices: &[usize]) -> Result<(), Error> {
        let len = self.data.len();
        let mut result = Ok(());
        let mut checked = 0;

        for (position, &index) in indices.iter().enumerate() {
            if index >= len {
                result = Err(Error::IndexOutOfBounds { index, len });
                break
            }
            if self.seen[index] {
                result = Err(Error::DuplicateQueryElement { position });
                break
            }

            self.seen.set(index, true);
            checked += 1;
        }

        for &index in &indices[.. checked] {
            self.seen.set(index, false);
        }

        result
    }

    /// Moves the elements of `indices` to new sets, assuming the query has been checked.
    fn split_off(&mut self, indices: &[usize]) -> Vec<Split> {
        // Maps a set that is split during this call to the set receiving its query elements.
        let mut intersections = HashMap::new();
        let mut splits = Vec::new();

        for &index in indices {
            let set = self.meta[index].set();
            let intersection = match intersections.entry(set) {
                hash_map::Entry::Occupied(occupied) => *occupied.get(),
                hash_map::Entry::Vacant(vacant) => {
                    let intersection = self.bounds.len();
                    self.bounds.push(Bounds::empty_at(self.bounds[set].begin()));
                    splits.push(Split {
                        intersection,
                        difference: set,
                    });

                    *vacant.insert(intersection)
                },
            };

            // The slot just past the new set still holds an element of `set` that was not moved.
            let place = self.meta[index].place();
            let end = self.bounds[intersection].end();
            self.swap_places(place, end);

            self.meta[index].set_set(intersection);
            self.bounds[intersection].grow();
        }

        // The remaining elements of each split set are the ones after its intersection.
        for split in &splits {
            let end = self.bounds[split.intersection].end();
            self.bounds[split.difference].set_begin(end);
        }

        splits
    }

    /// Swaps two entries of the dense storage and updates their places.
    #[inline]
    fn swap_places(&mut self, first: usize, second: usize) {
        self.storage.swap(first, second);

        let first_index = self.storage[first];
        let second_index = self.storage[second];
        self.meta[first_index].set_place(first);
        self.meta[second_index].set_place(second);
    }

    /// Returns the id of the set that `index` belongs to.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub fn set_of(&self, index: usize) -> usize {
        self.meta[index].set()
    }

    /// Returns the position of `index` in the dense storage.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub fn position(&self, index: usize) -> usize {
        self.meta[index].place()
    }

    /// Returns the dense storage, a permutation of the indices in which every set
    /// occupies a contiguous range.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec![(); 4];
    /// refine_vec.refine(&[3]).unwrap();
    ///
    /// assert!(refine_vec.storage()[0] == 3);
    /// assert!(refine_vec.position(3) == 0);
    /// # }
    /// ```
    #[inline]
    pub fn storage(&self) -> &[usize] {
        &self.storage
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// # fn main() {
    /// let mut refine_vec = refine_vec![(); 4];
    ///
    /// refine_vec.refine(&[1, 3]).unwrap();
    ///
    /// assert!(refine_vec.same_set(0, 2));
    /// assert!(!refine_vec.same_set(0, 1));
    /// assert!(refine_vec.same_set(1, 3));
    /// assert!(!refine_vec.same_set(2, 3));
    /// # }
    /// ```
    #[inline]
    pub fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        self.set_of(first_index) == self.set_of(second_index)
    }

    /// Returns `true` if `first_index` and `second_index` are in different sets.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` are out of bounds.
    #[inline]
    pub fn other_sets(&self, first_index: usize, second_index: usize) -> bool {
        self.set_of(first_index) != self.set_of(second_index)
    }

    /// Returns `true` if `index` is the only element of its set.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec![(); 3];
    ///
    /// refine_vec.refine(&[1]).unwrap();
    ///
    /// assert!(!refine_vec.is_singleton(0));
    /// assert!(refine_vec.is_singleton(1));
    /// assert!(!refine_vec.is_singleton(2));
    /// # }
    /// ```
    #[inline]
    pub fn is_singleton(&self, index: usize) -> bool {
        self.len_of_set(self.set_of(index)) == 1
    }

    /// Returns the amount of elements in the set with id `set`.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Panics
    ///
    /// If no set with id `set` has been created.
    #[inline]
    pub fn len_of_set(&self, set: usize) -> usize {
        self.bounds[set].len()
    }

    /// Returns the amount of non-empty sets in the `RefineVec<T>`.
    ///
    /// This method will be executed in `O(s)` time where `s` is the amount of set ids created.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec![(); 3];
    ///
    /// // Refining with a whole set leaves its old id empty.
    /// refine_vec.refine(&[0, 1, 2]).unwrap();
    ///
    /// assert!(refine_vec.amount_of_sets() == 1);
    /// assert!(refine_vec.set_count() == 2);
    /// # }
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        self.bounds.iter().filter(|bounds| !bounds.is_empty()).count()
    }

    /// Returns the amount of set ids created so far, including the ids of empty sets.
    ///
    /// This is also the id the next new set will get.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.bounds.len()
    }

    /// Returns an iterator over the elements of the set with id `set`.
    ///
    /// The iterator returned yields pairs `(i, &value)` where `i` is the index of the value and
    /// `value` is the value itself.
    ///
    /// The elements are returned in the order of the dense storage.
    ///
    /// # Panics
    ///
    /// If no set with id `set` has been created.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec!['a', 'b', 'c', 'd'];
    /// let splits = refine_vec.refine(&[0, 2]).unwrap();
    ///
    /// let mut done = [0, 0, 0, 0];
    /// for (index, value) in refine_vec.set(splits[0].intersection) {
    ///     assert!(*value == 'a' || *value == 'c');
    ///     done[index] += 1;
    /// }
    /// for (index, value) in refine_vec.set(splits[0].difference) {
    ///     assert!(*value == 'b' || *value == 'd');
    ///     done[index] += 1;
    /// }
    /// assert!(done == [1, 1, 1, 1]);
    /// # }
    /// ```
    #[inline]
    pub fn set(&self, set: usize) -> Set<T> {
        Set {
            refine_vec: self,
            range: self.bounds[set].range(),
        }
    }

    /// Returns an iterator over all non-empty sets of the `RefineVec<T>`.
    ///
    /// The iterator returned yields `Set` iterators.
    /// The sets are returned in order of their id.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec![0, 1, 2, 3, 4, 5];
    /// refine_vec.refine(&[0, 2, 4]).unwrap();
    ///
    /// for set in refine_vec.all_sets() {
    ///     let values: Vec<_> = set.map(|(_, &value)| value).collect();
    ///     assert!(values.len() == 3);
    ///     assert!(values.iter().all(|value| value % 2 == values[0] % 2));
    /// }
    /// # }
    /// ```
    #[inline]
    pub fn all_sets(&self) -> AllSets<T> {
        AllSets {
            refine_vec: self,
            range: 0 .. self.bounds.len(),
        }
    }

    /// Returns the non-empty sets as vectors of values, in order of their id.
    ///
    /// The values of a set are in the order of the dense storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate partition_refinement;
    /// #
    /// # fn main() {
    /// let mut refine_vec = refine_vec!['a', 'b', 'c'];
    /// refine_vec.refine(&[1]).unwrap();
    ///
    /// assert!(refine_vec.collect_sets() == vec![vec!['a', 'c'], vec!['b']]);
    /// # }
    /// ```
    pub fn collect_sets(&self) -> Vec<Vec<T>> where T: Clone {
        self.all_sets()
            .map(|set| set.map(|(_, value)| value.clone()).collect())
            .collect()
    }

    /// Returns `true` if the `RefineVec<T>` contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extracts a slice of the values in the order they were given.
    ///
    /// This will not take the sets of the `RefineVec<T>` in to account at all.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T> fmt::Debug for RefineVec<T> where T: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We name the sets in order of appearance so equal partitions look the same.
        let mut names = HashMap::with_capacity(self.bounds.len());
        let mut builder = formatter.debug_list();

        for (index, value) in self.data.iter().enumerate() {
            let next = names.len();
            let name = *names.entry(self.set_of(index)).or_insert(next);

            builder.entry(&format_args!("{:?} => {}", value, name));
        }

        builder.finish()
    }
}

impl<T> PartialEq for RefineVec<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        if self.data != other.data || self.amount_of_sets() != other.amount_of_sets() {
            return false
        }

        // We map the sets of self to the sets of other.
        let mut map = HashMap::with_capacity(self.bounds.len());

        for index in 0 .. self.data.len() {
            let self_set = self.set_of(index);
            let other_set = other.set_of(index);

            match map.entry(self_set) {
                hash_map::Entry::Occupied(occupied) => {
                    if *occupied.get() != other_set {
                        return false
                    }
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(other_set);
                },
            }
        }

        true
    }
}

impl<T> Eq for RefineVec<T> where T: Eq {}

impl<T, I> ops::Index<I> for RefineVec<T> where I: std::slice::SliceIndex<[T]> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        (**self).index(index)
    }
}

impl<T, I> ops::IndexMut<I> for RefineVec<T> where I: std::slice::SliceIndex<[T]> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        (**self).index_mut(index)
    }
}

impl<T> ops::Deref for RefineVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> ops::DerefMut for RefineVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for RefineVec<T> {
    fn from(data: Vec<T>) -> Self {
        let len = data.len();

        Self {
            data,
            storage: (0 .. len).collect(),
            meta: (0 .. len).map(|index| Metadata::new(0, index)).collect(),
            bounds: vec![Bounds::new(0, len)],
            seen: BitVec::from_elem(len, false),
        }
    }
}

impl<T> FromIterator<T> for RefineVec<T> {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = T> {
        Self::from(Vec::from_iter(iter))
    }
}

impl<'a, T> FromIterator<&'a T> for RefineVec<T> where T: Copy + 'a {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = &'a T> {
        Self::from_iter(iter.into_iter().cloned())
    }
}

#[cfg(feature = "rayon")]
impl<T> FromParallelIterator<T> for RefineVec<T> where T: Send {
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = T> {
        Self::from(par_iter.into_par_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for RefineVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> std::vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RefineVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

#[cfg(feature = "rayon")]
impl<'a, T> IntoParallelIterator for &'a RefineVec<T> where T: Sync {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.data.par_iter()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for RefineVec<T> where
    T: Arbitrary,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            // Few labels have many trailing zeros, this gives sets of very different sizes.
            let labeled = vec.into_iter()
                .map(|(value, label)| (value, label.trailing_zeros()))
                .collect();

            Self::from_labeled(labeled)
        }).boxed()
    }
}

/// An iterator over a set in a `RefineVec<T>`.
///
/// This struct is created by the [`set`] method on [`RefineVec<T>`].
/// See its documentation for more.
///
/// [`set`]: struct.RefineVec.html#method.set
/// [`RefineVec<T>`]: struct.RefineVec.html
#[derive(Clone, Debug)]
pub struct Set<'a, T: 'a> {
    refine_vec: &'a RefineVec<T>,
    range: ops::Range<usize>,
}

impl<'a, T> Set<'a, T> {
    #[inline]
    fn item(&self, place: usize) -> (usize, &'a T) {
        let index = self.refine_vec.storage[place];

        (index, &self.refine_vec.data[index])
    }
}

impl<'a, T> Iterator for Set<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<(usize, &'a T)> {
        let place = self.range.next()?;

        Some(self.item(place))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Set<'a, T> {
    fn next_back(&mut self) -> Option<(usize, &'a T)> {
        let place = self.range.next_back()?;

        Some(self.item(place))
    }
}

impl<'a, T> ExactSizeIterator for Set<'a, T> {}

impl<'a, T> FusedIterator for Set<'a, T> {}

/// An iterator over all non-empty sets in a `RefineVec<T>`.
///
/// This struct is created by the [`all_sets`] method on [`RefineVec<T>`].
/// See its documentation for more information.
///
/// [`all_sets`]: struct.RefineVec.html#method.all_sets
/// [`RefineVec<T>`]: struct.RefineVec.html
#[derive(Clone, Debug)]
pub struct AllSets<'a, T: 'a> {
    refine_vec: &'a RefineVec<T>,
    range: ops::Range<usize>,
}

impl<'a, T> Iterator for AllSets<'a, T> {
    type Item = Set<'a, T>;

    fn next(&mut self) -> Option<Set<'a, T>> {
        // We skip the sets that have been emptied by a refinement.
        loop {
            let set = self.range.next()?;

            if self.refine_vec.len_of_set(set) != 0 {
                return Some(self.refine_vec.set(set))
            }
        }
    }
}

impl<'a, T> DoubleEndedIterator for AllSets<'a, T> {
    fn next_back(&mut self) -> Option<Set<'a, T>> {
        loop {
            let set = self.range.next_back()?;

            if self.refine_vec.len_of_set(set) != 0 {
                return Some(self.refine_vec.set(set))
            }
        }
    }
}

impl<'a, T> FusedIterator for AllSets<'a, T> {}
