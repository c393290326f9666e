//! A `Collection` is a set of music discs, each `Disc` an (artist, album)
//! pair. Collections grow as needed, refuse duplicate discs, and support the
//! set operations `join` (union), `common` (intersection), `split`
//! (symmetric difference) and `diff`.
//!
//! ```
//! use discset::{Collection, Disc};
//!
//! let mut shelf = Collection::new();
//! assert!(shelf.insert(Disc::new("Queen", "A Night at the Opera")));
//! assert!(!shelf.insert(Disc::new("Queen", "A Night at the Opera")));
//! assert_eq!(shelf.count(), 1);
//! assert!(shelf.remove(&Disc::new("Queen", "A Night at the Opera")));
//! assert_eq!(shelf.count(), 0);
//! ```
//!
//! Removal moves the last disc into the removed disc's slot, so the order of
//! a collection is insertion order only until the first removal.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod collection;
pub mod disc;
pub mod operations;

pub use crate::collection::Collection;
pub use crate::disc::Disc;
