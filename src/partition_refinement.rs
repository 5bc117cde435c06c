use {
    std::{
        fmt,
        borrow::Borrow,
        convert::TryFrom,
        hash::{Hash, BuildHasher},
        collections::hash_map::{self, HashMap, RandomState},
    },
    crate::{
        Error,
        refinement::refine_vec::{
            AllSets,
            RefineVec,
            Set,
            Split,
        },
    },
};

/// A partition refinement structure over a universe of distinct, hashable elements.
///
/// This is a [`RefineVec<T>`] together with a map from each element to its index,
/// so sets can be split and queried by the elements themselves.
///
/// # Examples
///
/// ```
/// use partition_refinement::PartitionRefinement;
///
/// let mut partition: PartitionRefinement<i32> = PartitionRefinement::new(0 .. 10).unwrap();
///
/// partition.refine(&[2, 3, 5, 7]).unwrap();
/// partition.refine(&[0, 2, 4, 6, 8]).unwrap();
///
/// assert!(partition.amount_of_sets() == 4);
/// assert!(partition.is_singleton(&2));
/// assert!(partition.same_set(&1, &9));
/// assert!(partition.same_set(&3, &7));
/// assert!(partition.other_sets(&0, &1));
/// ```
///
/// [`RefineVec<T>`]: refinement/refine_vec/struct.RefineVec.html
#[derive(Clone)]
pub struct PartitionRefinement<T, S = RandomState> {
    map: HashMap<T, usize, S>,
    vec: RefineVec<T>,
}

impl<T> PartitionRefinement<T, RandomState> where
    T: Eq + Hash + Clone,
{
    /// Constructs a `PartitionRefinement<T>` where all elements of `universe` share set `0`.
    ///
    /// # Errors
    ///
    /// If an element occurs twice in `universe`.
    ///
    /// ```
    /// use partition_refinement::{Error, PartitionRefinement};
    ///
    /// let result = PartitionRefinement::new(vec!['a', 'b', 'a']);
    /// assert!(result.unwrap_err() == Error::DuplicateElement { first: 0, position: 2 });
    /// ```
    #[inline]
    pub fn new<I>(universe: I) -> Result<Self, Error> where
        I: IntoIterator<Item = T>,
    {
        Self::with_hasher(universe, RandomState::new())
    }
}

impl<T, S> PartitionRefinement<T, S> where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    pub fn with_hasher<I>(universe: I, hash_builder: S) -> Result<Self, Error> where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = universe.into_iter().collect();
        let mut map = HashMap::with_capacity_and_hasher(data.len(), hash_builder);

        for (position, value) in data.iter().enumerate() {
            match map.entry(value.clone()) {
                hash_map::Entry::Occupied(occupied) => {
                    let error = Error::DuplicateElement {
                        first: *occupied.get(),
                        position,
                    };
                    log::debug!("rejected a universe of {} elements: {}", data.len(), error);

                    return Err(error)
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(position);
                },
            }
        }

        Ok(Self {
            map,
            vec: RefineVec::from(data),
        })
    }

    /// Splits every set by the elements of `query`.
    ///
    /// Each set `s` that contains an element of `query` is replaced by `s ∩ query`,
    /// which gets a new set id, and `s \ query`, which keeps the id of `s`.
    /// This takes time proportional to the length of `query`, sets without query elements
    /// are never looked at.
    ///
    /// # Errors
    ///
    /// If an element of `query` is not in the universe or occurs twice in `query`.
    /// Nothing is changed when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use partition_refinement::{Error, PartitionRefinement};
    ///
    /// let universe = vec!["ant".to_string(), "bee".to_string(), "cat".to_string()];
    /// let mut partition = PartitionRefinement::new(universe).unwrap();
    ///
    /// let splits = partition.refine(["bee", "ant"].iter().copied()).unwrap();
    /// assert!(splits.len() == 1);
    /// assert!(partition.same_set("ant", "bee"));
    ///
    /// let error = partition.refine(["cat", "dog"].iter().copied()).unwrap_err();
    /// assert!(error == Error::UnknownElement { position: 1 });
    /// assert!(partition.same_set("ant", "bee"));
    /// assert!(partition.other_sets("bee", "cat"));
    /// ```
    pub fn refine<'a, I, Q>(&mut self, query: I) -> Result<Vec<Split>, Error> where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
    {
        let query = query.into_iter();
        let mut indices = Vec::with_capacity(query.size_hint().0);

        for (position, key) in query.enumerate() {
            match self.map.get(key) {
                Some(&index) => indices.push(index),
                None => {
                    let error = Error::UnknownElement { position };
                    log::debug!("rejected a query: {}", error);

                    return Err(error)
                },
            }
        }

        self.vec.refine(&indices)
    }

    /// Returns the non-empty sets as vectors of elements, in order of their id.
    ///
    /// ```
    /// use partition_refinement::PartitionRefinement;
    ///
    /// let mut partition = PartitionRefinement::new(vec!['a', 'b', 'c']).unwrap();
    /// partition.refine(&['b']).unwrap();
    ///
    /// assert!(partition.collect_sets() == vec![vec!['a', 'c'], vec!['b']]);
    /// ```
    #[inline]
    pub fn collect_sets(&self) -> Vec<Vec<T>> {
        self.vec.collect_sets()
    }

    /// Returns the id of the set containing `key`, or `None` if it is not in the universe.
    #[inline]
    pub fn set_of<Q>(&self, key: &Q) -> Option<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Some(self.vec.set_of(*self.map.get(key)?))
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// # Panics
    ///
    /// If `first_key` or `second_key` is not in the universe.
    #[inline]
    pub fn same_set<Q1, Q2>(&self, first_key: &Q1, second_key: &Q2) -> bool where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        self.vec.same_set(self.map[first_key], self.map[second_key])
    }

    /// # Panics
    ///
    /// If `first_key` or `second_key` is not in the universe.
    #[inline]
    pub fn other_sets<Q1, Q2>(&self, first_key: &Q1, second_key: &Q2) -> bool where
        T: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ?Sized,
        Q2: Eq + Hash + ?Sized,
    {
        self.vec.other_sets(self.map[first_key], self.map[second_key])
    }

    /// # Panics
    ///
    /// If `key` is not in the universe.
    #[inline]
    pub fn is_singleton<Q>(&self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.vec.is_singleton(self.map[key])
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }
}

impl<T, S> PartitionRefinement<T, S> {
    #[inline]
    pub fn len_of_set(&self, set: usize) -> usize {
        self.vec.len_of_set(set)
    }

    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.vec.amount_of_sets()
    }

    #[inline]
    pub fn set_count(&self) -> usize {
        self.vec.set_count()
    }

    #[inline]
    pub fn set(&self, set: usize) -> Set<T> {
        self.vec.set(set)
    }

    #[inline]
    pub fn all_sets(&self) -> AllSets<T> {
        self.vec.all_sets()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// The underlying `RefineVec<T>`, its indices are the positions in the universe.
    #[inline]
    pub fn as_refine_vec(&self) -> &RefineVec<T> {
        &self.vec
    }
}

impl<T> TryFrom<Vec<T>> for PartitionRefinement<T, RandomState> where
    T: Eq + Hash + Clone,
{
    type Error = Error;

    fn try_from(universe: Vec<T>) -> Result<Self, Error> {
        Self::new(universe)
    }
}

impl<T, S> fmt::Debug for PartitionRefinement<T, S> where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.vec, formatter)
    }
}
