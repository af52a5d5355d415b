//! A dense set of vertex indices, sized to the graph when a search starts.

#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

#[cfg(feature = "bitvec")]
pub(crate) struct VisitedSet(BitVec);

#[cfg(feature = "bitvec")]
impl VisitedSet {
    pub fn new(len: usize) -> Self {
        VisitedSet(BitVec::repeat(false, len))
    }

    /// Marks `index` as visited, returning true if it was not visited before.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(mut bit) => !std::mem::replace(&mut *bit, true),
            None => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|bit| *bit)
    }
}

#[cfg(not(feature = "bitvec"))]
pub(crate) struct VisitedSet(Vec<bool>);

#[cfg(not(feature = "bitvec"))]
impl VisitedSet {
    pub fn new(len: usize) -> Self {
        VisitedSet(vec![false; len])
    }

    /// Marks `index` as visited, returning true if it was not visited before.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(bit) => !std::mem::replace(bit, true),
            None => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }
}
