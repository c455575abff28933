use std::fmt;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::record::Record;

use super::checker::SortOrderChecker;
use super::sort_order::SortOrder;

/// Pass-through iterator that checks every record against a sort order.
///
/// Records come out unchanged and in input order, wrapped in `Ok`. A record
/// that breaks the order is reported as `Err` in its place; records yielded
/// before it are unaffected. Polling past an error resumes with the next
/// input record, still compared against the last accepted one.
pub struct SortOrderEnforcingIterator<I: Iterator> {
    inner: I,
    checker: SortOrderChecker<I::Item>,
}

impl<I> SortOrderEnforcingIterator<I>
where
    I: Iterator,
    I::Item: Record + Clone,
{
    /// Wrap `records`, enforcing `sort_order`.
    pub fn new<T>(records: T, sort_order: &SortOrder) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: records.into_iter(),
            checker: SortOrderChecker::new(sort_order),
        }
    }

    /// The checker driving this iterator.
    pub fn checker(&self) -> &SortOrderChecker<I::Item> {
        &self.checker
    }

    /// Unwrap into the underlying iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for SortOrderEnforcingIterator<I>
where
    I: Iterator,
    I::Item: Record + Clone,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        Some(self.checker.add(&record).map(|()| record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for SortOrderEnforcingIterator<I>
where
    I: FusedIterator,
    I::Item: Record + Clone,
{
}

impl<I> fmt::Debug for SortOrderEnforcingIterator<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOrderEnforcingIterator")
            .field("inner", &self.inner)
            .field("checker", &self.checker)
            .finish()
    }
}

/// Adds [`enforce_sort_order`](EnforceSortOrder::enforce_sort_order) to iterators of records.
pub trait EnforceSortOrder: Iterator + Sized
where
    Self::Item: Record + Clone,
{
    /// Check each record against `sort_order` as it is yielded.
    fn enforce_sort_order(self, sort_order: &SortOrder) -> SortOrderEnforcingIterator<Self> {
        SortOrderEnforcingIterator::new(self, sort_order)
    }
}

impl<I> EnforceSortOrder for I
where
    I: Iterator,
    I::Item: Record + Clone,
{
}
