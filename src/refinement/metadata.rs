use std::ops::Range;

/// This provides the index information about a given element in the `RefineVec`.
///
/// For each element in the `RefineVec` we store a `Metadata`, addressed by the index the
/// element had in the universe it was constructed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    /// The id of the set the element currently belongs to.
    set: usize,
    /// The position of the element in the dense storage.
    place: usize,
}

impl Metadata {
    /// Create a new `Metadata` for an element of `set` stored at `place`.
    pub(crate) fn new(set: usize, place: usize) -> Self {
        Self {
            set,
            place,
        }
    }

    /// Return the `set` variable.
    pub(crate) fn set(&self) -> usize {
        self.set
    }

    /// Set the `set` variable.
    pub(crate) fn set_set(&mut self, value: usize) {
        self.set = value;
    }

    /// Return the `place` variable.
    pub(crate) fn place(&self) -> usize {
        self.place
    }

    /// Set the `place` variable.
    pub(crate) fn set_place(&mut self, value: usize) {
        self.place = value;
    }
}

/// The half-open range `[begin, end)` of the dense storage owned by a set.
///
/// A set only ever loses elements from the front of its range, while a set created by a split
/// only ever gains elements at the back of its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bounds {
    begin: usize,
    end: usize,
}

impl Bounds {
    pub(crate) fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);

        Self {
            begin,
            end,
        }
    }

    /// An empty range that will grow from `begin`.
    pub(crate) fn empty_at(begin: usize) -> Self {
        Self::new(begin, begin)
    }

    pub(crate) fn begin(&self) -> usize {
        self.begin
    }

    pub(crate) fn end(&self) -> usize {
        self.end
    }

    /// Moves the start of the range, this never grows the range.
    pub(crate) fn set_begin(&mut self, value: usize) {
        debug_assert!(self.begin <= value && value <= self.end);

        self.begin = value;
    }

    /// Takes the slot just past the end into the range.
    pub(crate) fn grow(&mut self) {
        self.end += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.end - self.begin
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub(crate) fn range(&self) -> Range<usize> {
        self.begin .. self.end
    }
}
