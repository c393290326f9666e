//! Provides the `Collection` structure, a set of `Disc`s kept in insertion
//! order (until something is removed).
use anyhow::{bail, Result};
use fxhash::FxBuildHasher;
use indexmap::{set, IndexSet};
use log::{debug, trace};

use crate::disc::Disc;

type DiscSet = IndexSet<Disc, FxBuildHasher>;

/// A `Collection` is a set of discs, each disc a member of an `IndexSet`.
/// * Discs occupy indices `0..count()` with no gaps.
/// * No two discs in a collection are equal: `insert` refuses duplicates.
/// * Removal moves the last disc into the vacated slot, so removing changes
///   the order of the remaining discs.
/// * The collection also keeps a logical `capacity`, which starts at
///   `DEFAULT_CAPACITY`, doubles whenever an insertion finds the collection
///   full, and never shrinks.
#[derive(Debug)]
pub struct Collection {
    discs: DiscSet,
    capacity: usize,
}

impl Collection {
    /// The capacity of a collection made by `new()`
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Creates an empty collection with room for `DEFAULT_CAPACITY` discs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with room for `capacity` discs. A
    /// `capacity` of zero is treated as one, so that doubling can grow it.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let discs = DiscSet::with_capacity_and_hasher(capacity, FxBuildHasher::default());
        Collection { discs, capacity }
    }

    /// Creates a collection holding `discs`, in order. Unlike `collect()`,
    /// which quietly skips duplicates, this fails on the first disc that
    /// equals one seen earlier.
    pub fn from_unique(discs: impl IntoIterator<Item = Disc>) -> Result<Self> {
        let mut collection = Collection::new();
        for disc in discs {
            if let Some(index) = collection.find(&disc) {
                bail!(
                    "Duplicate disc: {:?} by {:?} (first seen at position {index})",
                    disc.album(),
                    disc.artist()
                );
            }
            collection.insert(disc);
        }
        Ok(collection)
    }

    /// Inserts `disc` at the end of the collection and returns `true`, unless
    /// an equal disc is already present, in which case the collection is left
    /// alone and we return `false`.
    pub fn insert(&mut self, disc: Disc) -> bool {
        if self.discs.contains(&disc) {
            trace!("not inserting {:?} by {:?}: already present", disc.album(), disc.artist());
            return false;
        }
        if self.discs.len() == self.capacity {
            self.grow();
        }
        self.discs.insert(disc)
    }

    /// Doubles the logical capacity, reserving room to match. Only called
    /// when the collection is full.
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        self.capacity = old_capacity.saturating_mul(2);
        self.discs.reserve(self.capacity - self.discs.len());
        debug!("collection grew from {old_capacity} to {} slots", self.capacity);
    }

    /// Removes the disc equal to `disc`, if there is one, by moving the last
    /// disc into its slot. Returns `false` if no such disc is present.
    pub fn remove(&mut self, disc: &Disc) -> bool {
        self.discs.swap_remove(disc)
    }

    /// Returns the index of the disc equal to `disc`, or `None` if there
    /// isn't one.
    #[must_use]
    pub fn find(&self, disc: &Disc) -> Option<usize> {
        self.discs.get_full(disc).map(|(index, _)| index)
    }

    /// Removes every disc by `artist`, returning `true` if there were any.
    /// An empty `artist` matches nothing.
    ///
    /// We walk the indices from last to first. Each removal moves the last
    /// disc into the current slot, and that disc has already been looked at.
    pub fn boycott(&mut self, artist: &str) -> bool {
        if artist.is_empty() {
            return false;
        }
        let before = self.discs.len();
        for index in (0..self.discs.len()).rev() {
            if self.discs[index].artist() == artist {
                self.discs.swap_remove_index(index);
            }
        }
        let removed = before - self.discs.len();
        if removed > 0 {
            debug!("boycott of {artist:?} removed {removed} disc(s)");
        }
        removed > 0
    }

    /// The number of discs in the collection
    #[must_use]
    pub fn count(&self) -> usize {
        self.discs.len()
    }

    /// The number of discs the collection can hold before it next grows
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Is the collection empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Does the collection hold a disc equal to `disc`?
    #[must_use]
    pub fn contains(&self, disc: &Disc) -> bool {
        self.discs.contains(disc)
    }

    /// The disc at `index`, if `index < count()`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Disc> {
        self.discs.get_index(index)
    }

    /// Iterates over the discs in index order.
    #[must_use]
    pub fn iter(&self) -> set::Iter<'_, Disc> {
        self.discs.iter()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Collection::new()
    }
}

/// A clone has its own storage, sized to the original's capacity, with the
/// same discs in the same order.
impl Clone for Collection {
    fn clone(&self) -> Self {
        let mut discs = DiscSet::with_capacity_and_hasher(self.capacity, FxBuildHasher::default());
        discs.extend(self.discs.iter().cloned());
        Collection { discs, capacity: self.capacity }
    }
}

/// Two collections are equal if they hold the same discs, in any order and
/// whatever their capacities.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.discs == other.discs
    }
}
impl Eq for Collection {}

impl FromIterator<Disc> for Collection {
    fn from_iter<I: IntoIterator<Item = Disc>>(iter: I) -> Self {
        let mut collection = Collection::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<Disc> for Collection {
    fn extend<I: IntoIterator<Item = Disc>>(&mut self, iter: I) {
        for disc in iter {
            self.insert(disc);
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Disc;
    type IntoIter = set::Iter<'a, Disc>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Disc;
    type IntoIter = set::IntoIter<Disc>;
    fn into_iter(self) -> Self::IntoIter {
        self.discs.into_iter()
    }
}
