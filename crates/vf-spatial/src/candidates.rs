//! The set of point indices surviving the box pre-filter.

use std::ops::RangeInclusive;

/// Sorted, de-duplicated indices into the point sequence.
///
/// Produced by a single [`PointIndex::query`](crate::PointIndex::query) and
/// read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    indices: Vec<usize>,
}

impl CandidateSet {
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// O(log k) membership test.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.indices.binary_search(&idx).is_ok()
    }

    /// Smallest to largest candidate index, inclusive.  `None` when empty.
    pub fn span(&self) -> Option<RangeInclusive<usize>> {
        Some(*self.indices.first()?..=*self.indices.last()?)
    }

    /// Candidate indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

impl FromIterator<usize> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter.into_iter().collect())
    }
}
