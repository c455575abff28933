use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::contig::ContigIndex;
use crate::error::{Result, SortOrderError};
use crate::record::Record;

use super::keys::{BarcodesAndCoordinateKey, CoordinateKey, SortOrderKey};

/// The declared ordering of a set of records.
///
/// `Unknown` and `Unsorted` exist so files can declare that no order holds;
/// they never produce sort keys. `Coordinate` and `BarcodesAndCoordinate`
/// optionally carry a [`ContigIndex`] ranking chromosomes; without one,
/// chromosome names compare lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum SortOrder {
    /// Order not known.
    Unknown,
    /// Explicitly unordered.
    Unsorted,
    /// Tumor barcode, matched normal barcode, chromosome, start, end.
    BarcodesAndCoordinate {
        /// Chromosome ranking, if any
        contigs: Option<Arc<ContigIndex>>,
    },
    /// Chromosome, start, end.
    Coordinate {
        /// Chromosome ranking, if any
        contigs: Option<Arc<ContigIndex>>,
    },
}

impl SortOrder {
    /// Every registered ordering, without contig indexes, in registry order.
    pub fn all() -> [SortOrder; 4] {
        [
            Self::Unknown,
            Self::Unsorted,
            Self::BarcodesAndCoordinate { contigs: None },
            Self::Coordinate { contigs: None },
        ]
    }

    /// Names of every registered ordering, in registry order.
    pub fn names() -> [&'static str; 4] {
        Self::all().map(|order| order.name())
    }

    /// Look up an ordering by its exact, case-sensitive name.
    pub fn find(name: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|order| order.name() == name)
            .ok_or_else(|| SortOrderError::UnknownOrderingName {
                name: name.to_string(),
                options: Self::names().map(str::to_string).to_vec(),
            })
    }

    /// Coordinate ordering with chromosomes ranked by `contigs`.
    pub fn coordinate(contigs: ContigIndex) -> Self {
        Self::Coordinate {
            contigs: Some(Arc::new(contigs)),
        }
    }

    /// Barcode-then-coordinate ordering with chromosomes ranked by `contigs`.
    pub fn barcodes_and_coordinate(contigs: ContigIndex) -> Self {
        Self::BarcodesAndCoordinate {
            contigs: Some(Arc::new(contigs)),
        }
    }

    /// Attach a contig index. `Unknown` and `Unsorted` are returned unchanged.
    pub fn with_contigs(self, contigs: ContigIndex) -> Self {
        match self {
            Self::Unknown | Self::Unsorted => self,
            Self::BarcodesAndCoordinate { .. } => Self::barcodes_and_coordinate(contigs),
            Self::Coordinate { .. } => Self::coordinate(contigs),
        }
    }

    /// Stable identifier used in file headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Unsorted => "Unsorted",
            Self::BarcodesAndCoordinate { .. } => "BarcodesAndCoordinate",
            Self::Coordinate { .. } => "Coordinate",
        }
    }

    /// Contig index ranking chromosomes, if one is attached.
    pub fn contigs(&self) -> Option<&ContigIndex> {
        match self {
            Self::Unknown | Self::Unsorted => None,
            Self::BarcodesAndCoordinate { contigs } | Self::Coordinate { contigs } => {
                contigs.as_deref()
            }
        }
    }

    /// Whether records can be keyed, sorted and checked under this ordering.
    pub fn supports_sort_key(&self) -> bool {
        self.key_fn().is_some()
    }

    /// The function deriving sort keys from records.
    ///
    /// Fails with [`SortOrderError::UnsupportedOrdering`] for `Unknown` and
    /// `Unsorted`.
    pub fn sort_key(&self) -> Result<SortKeyFn> {
        self.key_fn()
            .ok_or(SortOrderError::UnsupportedOrdering { name: self.name() })
    }

    pub(crate) fn key_fn(&self) -> Option<SortKeyFn> {
        let (kind, contigs) = match self {
            Self::Unknown | Self::Unsorted => return None,
            Self::BarcodesAndCoordinate { contigs } => (KeyKind::BarcodesAndCoordinate, contigs),
            Self::Coordinate { contigs } => (KeyKind::Coordinate, contigs),
        };
        // An empty index ranks nothing; fall back to comparing names.
        let contigs = contigs
            .as_ref()
            .filter(|contigs| !contigs.is_empty())
            .map(Arc::clone);
        Some(SortKeyFn { kind, contigs })
    }

    /// Sort records into this ordering.
    ///
    /// The sort is stable. Fails on the first record whose key cannot be
    /// derived, and for orderings without keys.
    pub fn sort<R: Record>(&self, records: Vec<R>) -> Result<Vec<R>> {
        let key_fn = self.sort_key()?;
        let mut keyed = records
            .into_iter()
            .map(|record| key_fn.key(&record).map(|key| (key, record)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(keyed.into_iter().map(|(_, record)| record).collect())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderError;

    fn from_str(name: &str) -> Result<Self> {
        Self::find(name)
    }
}

impl TryFrom<String> for SortOrder {
    type Error = SortOrderError;

    fn try_from(name: String) -> Result<Self> {
        Self::find(&name)
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    Coordinate,
    BarcodesAndCoordinate,
}

/// Derives [`SortOrderKey`]s for one ordering.
///
/// Holds a shared handle to the ordering's contig index, so it can outlive
/// the [`SortOrder`] it came from and be sent to other threads.
#[derive(Debug, Clone)]
pub struct SortKeyFn {
    kind: KeyKind,
    contigs: Option<Arc<ContigIndex>>,
}

impl SortKeyFn {
    /// Derive the key of a record.
    pub fn key<R: Record + ?Sized>(&self, record: &R) -> Result<SortOrderKey> {
        let contigs = self.contigs.as_deref();
        match self.kind {
            KeyKind::Coordinate => {
                CoordinateKey::from_record(record, contigs).map(SortOrderKey::Coordinate)
            }
            KeyKind::BarcodesAndCoordinate => BarcodesAndCoordinateKey::from_record(record, contigs)
                .map(SortOrderKey::BarcodesAndCoordinate),
        }
    }

    /// Compare two records by their keys.
    pub fn compare<R: Record + ?Sized>(&self, this: &R, that: &R) -> Result<Ordering> {
        Ok(self.key(this)?.cmp(&self.key(that)?))
    }
}
