//! Record orderings and streaming order validation.
//!
//! A [`SortOrder`] names how records are declared to be ordered. Orderings
//! that define one hand out a [`SortKeyFn`], which turns records into
//! comparable [`SortOrderKey`]s. [`SortOrderChecker`] and
//! [`SortOrderEnforcingIterator`] use those keys to verify, one record at a
//! time, that a stream honours its declared order.

mod checker;
mod config;
mod iter;
mod keys;
mod sort_order;

pub use checker::SortOrderChecker;
pub use config::SortOrderConfig;
pub use iter::{EnforceSortOrder, SortOrderEnforcingIterator};
pub use keys::{
    compare_nullable, BarcodesAndCoordinateKey, ContigKey, CoordinateKey, SortOrderKey,
};
pub use sort_order::{SortKeyFn, SortOrder};
