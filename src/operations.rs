//! Houses the set operations on `Collection`s
//!
//! Each operation leaves both operands alone and returns a new collection:
//!
//! * `a.join(&b)` holds the discs in either collection,
//! * `a.common(&b)` holds the discs in both collections,
//! * `a.split(&b)` holds the discs in exactly one of the two, and
//! * `a.diff(&b)` holds the discs in `a` but not in `b`.

use crate::collection::Collection;

impl Collection {
    /// Returns the union of `self` and `other`. The result starts as a clone
    /// of `other` (so it has `other`'s capacity and order), followed by the
    /// discs of `self` that `other` lacks.
    #[must_use]
    pub fn join(&self, other: &Collection) -> Collection {
        let mut joined = other.clone();
        joined.extend(self.iter().cloned());
        joined
    }

    /// Returns the intersection of `self` and `other`, in `self`'s order.
    #[must_use]
    pub fn common(&self, other: &Collection) -> Collection {
        self.iter().filter(|disc| other.contains(disc)).cloned().collect()
    }

    /// Returns the symmetric difference of `self` and `other`: first the
    /// discs only `self` has, in `self`'s order, then the discs only `other`
    /// has, in `other`'s order.
    #[must_use]
    pub fn split(&self, other: &Collection) -> Collection {
        let mut split = self.diff(other);
        split.extend(other.iter().filter(|disc| !self.contains(disc)).cloned());
        split
    }

    /// Returns the discs of `self` that are not in `other`, in `self`'s order.
    #[must_use]
    pub fn diff(&self, other: &Collection) -> Collection {
        self.iter().filter(|disc| !other.contains(disc)).cloned().collect()
    }
}
