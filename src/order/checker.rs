use crate::error::{Result, SortOrderError};
use crate::record::Record;

use super::keys::SortOrderKey;
use super::sort_order::{SortKeyFn, SortOrder};

/// Single-pass check that records arrive in a declared order.
///
/// Only the most recently accepted record is retained, as an owned clone.
/// Records are cloned once per accepted record, so prefer record types whose
/// `Clone` is cheap; [`MafRecord`](crate::MafRecord) shares its cells through
/// an `Arc`. Under orderings without keys (`Unknown`, `Unsorted`) every record
/// is accepted.
#[derive(Debug)]
pub struct SortOrderChecker<R> {
    key_fn: Option<SortKeyFn>,
    previous: Option<Accepted<R>>,
    records_seen: u64,
}

/// Last accepted record and, once derived, its key.
#[derive(Debug)]
struct Accepted<R> {
    record: R,
    key: Option<SortOrderKey>,
}

impl<R: Record + Clone> SortOrderChecker<R> {
    /// Create a checker for the given ordering.
    pub fn new(sort_order: &SortOrder) -> Self {
        Self {
            key_fn: sort_order.key_fn(),
            previous: None,
            records_seen: 0,
        }
    }

    /// Check `record` against the previously accepted record.
    ///
    /// The first record is accepted without deriving any key. After that the
    /// keys of both records are derived, so a record that cannot be keyed
    /// fails when the next record arrives. On success the record becomes the
    /// new previous record. A record whose key sorts strictly before the
    /// previous key fails with [`SortOrderError::OrderViolation`] and is not
    /// retained.
    pub fn add(&mut self, record: &R) -> Result<()> {
        let key = match (&self.key_fn, &mut self.previous) {
            (Some(key_fn), Some(previous)) => {
                let key = key_fn.key(record)?;
                if previous.key.is_none() {
                    previous.key = Some(key_fn.key(&previous.record)?);
                }
                if previous.key.as_ref().is_some_and(|previous_key| key < *previous_key) {
                    return Err(SortOrderError::OrderViolation {
                        previous: previous.record.to_string(),
                        current: record.to_string(),
                    });
                }
                Some(key)
            }
            _ => None,
        };

        self.previous = Some(Accepted {
            record: record.clone(),
            key,
        });
        self.records_seen += 1;
        Ok(())
    }

    /// Check every record of `records` in turn, stopping at the first failure.
    ///
    /// Returns the number of records accepted by this call.
    pub fn check_all<I>(&mut self, records: I) -> Result<u64>
    where
        I: IntoIterator<Item = R>,
    {
        let before = self.records_seen;
        for record in records {
            self.add(&record)?;
        }
        Ok(self.records_seen - before)
    }

    /// The most recently accepted record.
    pub fn previous(&self) -> Option<&R> {
        self.previous.as_ref().map(|accepted| &accepted.record)
    }

    /// Number of records accepted so far.
    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }

    /// Whether records are actually compared.
    pub fn is_checking(&self) -> bool {
        self.key_fn.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::contig::ContigIndex;
    use crate::record::Locatable;

    #[derive(Debug, Clone)]
    struct Site(&'static str, i64);

    impl Locatable for Site {
        fn chromosome(&self) -> Option<&str> {
            Some(self.0)
        }
        fn start(&self) -> Option<i64> {
            Some(self.1)
        }
        fn end(&self) -> Option<i64> {
            Some(self.1)
        }
    }

    impl Record for Site {
        fn value(&self, _field: &str) -> Option<&str> {
            None
        }
        fn as_locatable(&self) -> Option<&dyn Locatable> {
            Some(self)
        }
    }

    impl fmt::Display for Site {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}:{}", self.0, self.1)
        }
    }

    #[test]
    fn accepts_non_decreasing_records() {
        let order = SortOrder::Coordinate { contigs: None };
        let mut checker = SortOrderChecker::new(&order);
        let accepted = checker
            .check_all([Site("chr1", 5), Site("chr1", 5), Site("chr1", 9), Site("chr2", 1)])
            .unwrap();
        assert_eq!(accepted, 4);
        assert_eq!(checker.previous().map(|site| site.1), Some(1));
    }

    #[test]
    fn rejects_record_before_previous() {
        let order = SortOrder::Coordinate { contigs: None };
        let mut checker = SortOrderChecker::new(&order);
        checker.add(&Site("chr1", 9)).unwrap();
        let err = checker.add(&Site("chr1", 3)).unwrap_err();
        assert_eq!(err.to_string(), "Records out of order\nchr1:9\nchr1:3");
        assert_eq!(checker.records_seen(), 1);
        assert_eq!(checker.previous().map(|site| site.1), Some(9));
    }

    #[test]
    fn unsorted_never_checks() {
        let mut checker = SortOrderChecker::new(&SortOrder::Unsorted);
        assert!(!checker.is_checking());
        checker
            .check_all([Site("chr9", 9), Site("chr1", 1), Site("chr1", 0)])
            .unwrap();
        assert_eq!(checker.previous().map(|site| site.1), Some(0));
    }

    #[test]
    fn first_record_is_accepted_without_a_key() {
        let order = SortOrder::coordinate(ContigIndex::from_names(["chr1"]));
        let mut checker = SortOrderChecker::new(&order);
        checker.add(&Site("chrZ", 1)).unwrap();
        assert_eq!(checker.records_seen(), 1);

        let err = checker.add(&Site("chr1", 1)).unwrap_err();
        assert!(matches!(err, SortOrderError::UnknownContig { ref contig, .. } if contig == "chrZ"));
        assert_eq!(checker.previous().map(|site| site.0), Some("chrZ"));
    }
}
