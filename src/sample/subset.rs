use fixedbitset::FixedBitSet;

use std::fmt;


/// A set of example indices.
/// Indices are kept sorted in ascending order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExampleSubset(Vec<usize>);


impl ExampleSubset {
    /// Construct an empty subset.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }


    /// The subset `{0, 1, ..., n_examples - 1}`.
    #[inline]
    pub fn all(n_examples: usize) -> Self {
        Self((0..n_examples).collect())
    }


    /// Number of examples in the subset.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }


    /// Returns `true` if the subset has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }


    /// Returns `true` if the subset holds example `i`.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.0.binary_search(&i).is_ok()
    }


    /// Iterate over the indices in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }


    /// Returns the indices as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0[..]
    }


    /// Push an index larger than every index in the subset.
    /// Partitioning scans a parent subset in ascending order,
    /// so the children stay sorted.
    #[inline]
    pub(crate) fn push_ascending(&mut self, i: usize) {
        debug_assert!(self.0.last().map_or(true, |&last| last < i));
        self.0.push(i);
    }
}


impl FromIterator<usize> for ExampleSubset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut indices = iter.into_iter().collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }
}


impl From<Vec<usize>> for ExampleSubset {
    #[inline]
    fn from(indices: Vec<usize>) -> Self {
        indices.into_iter().collect()
    }
}


impl<'a> IntoIterator for &'a ExampleSubset {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}


/// A set of attribute (column) indices
/// that are not used for splitting yet.
/// Iteration is in ascending order.
#[derive(Debug, Clone)]
pub struct AttributeSet(FixedBitSet);


impl AttributeSet {
    /// Construct an empty set.
    #[inline]
    pub fn new() -> Self {
        Self(FixedBitSet::new())
    }


    /// The set `{0, 1, ..., n_attributes - 1}`.
    #[inline]
    pub fn all(n_attributes: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(n_attributes);
        bits.insert_range(..);
        Self(bits)
    }


    /// Insert `attribute`.
    #[inline]
    pub fn insert(&mut self, attribute: usize) {
        if attribute >= self.0.len() {
            self.0.grow(attribute + 1);
        }
        self.0.insert(attribute);
    }


    /// Returns `true` if the set holds `attribute`.
    #[inline]
    pub fn contains(&self, attribute: usize) -> bool {
        self.0.contains(attribute)
    }


    /// Returns a copy of this set without `attribute`.
    #[inline]
    pub fn without(&self, attribute: usize) -> Self {
        let mut bits = self.0.clone();
        if attribute < bits.len() {
            bits.set(attribute, false);
        }
        Self(bits)
    }


    /// Number of attributes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones(..)
    }


    /// Returns `true` if no attribute is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Iterate over the attributes in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.ones()
    }


    /// The largest attribute in the set.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.iter().last()
    }
}


impl Default for AttributeSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}


impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}


impl Eq for AttributeSet {}


impl FromIterator<usize> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|attr| set.insert(attr));
        set
    }
}


impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{items}}}")
    }
}
