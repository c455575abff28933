//! Sort keys derived from records.
//!
//! Keys compare field by field in declared precedence and stop at the first
//! field that differs. Missing values sort after present ones.

use std::cmp::Ordering;
use std::fmt;

use crate::contig::ContigIndex;
use crate::error::{Result, SortOrderError};
use crate::record::{Record, MATCHED_NORM_SAMPLE_BARCODE, TUMOR_SAMPLE_BARCODE};

/// Placeholder printed for missing key fields.
const MISSING: &str = ".";

/// Three-way comparison where `None` sorts after every value and equals itself.
pub fn compare_nullable<T: Ord + ?Sized>(this: Option<&T>, that: Option<&T>) -> Ordering {
    match (this, that) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(this), Some(that)) => this.cmp(that),
    }
}

struct Nullable<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(MISSING),
        }
    }
}

/// Chromosome component of a coordinate key.
///
/// With a contig index the chromosome is replaced by its rank; without one
/// the name itself is compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContigKey {
    /// Position in the configured contig index.
    Rank(usize),
    /// Contig name, compared lexically.
    Name(String),
}

impl ContigKey {
    /// Resolve a chromosome against `contigs`.
    ///
    /// Without an index a missing chromosome stays missing and sorts last.
    /// With one, a missing chromosome is an unknown contig like any other.
    fn resolve(
        chromosome: Option<&str>,
        contigs: Option<&ContigIndex>,
    ) -> Result<Option<Self>> {
        match (chromosome, contigs) {
            (Some(chromosome), Some(contigs)) => {
                contigs.rank(chromosome).map(|rank| Some(Self::Rank(rank)))
            }
            (None, Some(contigs)) => Err(SortOrderError::UnknownContig {
                contig: MISSING.to_string(),
                known: contigs.names().to_vec(),
            }),
            (chromosome, None) => Ok(chromosome.map(|name| Self::Name(name.to_string()))),
        }
    }
}

impl fmt::Display for ContigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => fmt::Display::fmt(rank, f),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Key ordering records by chromosome, then start, then end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    chromosome: Option<ContigKey>,
    start: Option<i64>,
    end: Option<i64>,
}

impl CoordinateKey {
    /// Create a key from already resolved fields.
    pub fn new(chromosome: Option<ContigKey>, start: Option<i64>, end: Option<i64>) -> Self {
        Self {
            chromosome,
            start,
            end,
        }
    }

    /// Derive the key of a record, ranking its chromosome against `contigs`.
    pub fn from_record<R: Record + ?Sized>(
        record: &R,
        contigs: Option<&ContigIndex>,
    ) -> Result<Self> {
        let locus = record
            .as_locatable()
            .ok_or(SortOrderError::MissingCapability {
                type_name: record.type_name(),
            })?;
        let chromosome = ContigKey::resolve(locus.chromosome(), contigs)?;
        Ok(Self::new(chromosome, locus.start(), locus.end()))
    }

    /// Chromosome rank or name, if the record has a chromosome.
    pub fn chromosome(&self) -> Option<&ContigKey> {
        self.chromosome.as_ref()
    }

    /// Start position.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// End position.
    pub fn end(&self) -> Option<i64> {
        self.end
    }
}

impl Ord for CoordinateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nullable(self.chromosome(), other.chromosome())
            .then_with(|| compare_nullable(self.start.as_ref(), other.start.as_ref()))
            .then_with(|| compare_nullable(self.end.as_ref(), other.end.as_ref()))
    }
}

impl PartialOrd for CoordinateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            Nullable(self.chromosome.as_ref()),
            Nullable(self.start.as_ref()),
            Nullable(self.end.as_ref())
        )
    }
}

/// Key ordering records by tumor barcode, matched normal barcode, then
/// coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BarcodesAndCoordinateKey {
    tumor_barcode: Option<String>,
    normal_barcode: Option<String>,
    coordinate: CoordinateKey,
}

impl BarcodesAndCoordinateKey {
    /// Create a key from barcodes and a coordinate key.
    pub fn new(
        tumor_barcode: Option<String>,
        normal_barcode: Option<String>,
        coordinate: CoordinateKey,
    ) -> Self {
        Self {
            tumor_barcode,
            normal_barcode,
            coordinate,
        }
    }

    /// Derive the key of a record, ranking its chromosome against `contigs`.
    pub fn from_record<R: Record + ?Sized>(
        record: &R,
        contigs: Option<&ContigIndex>,
    ) -> Result<Self> {
        let tumor_barcode = record.value(TUMOR_SAMPLE_BARCODE).map(str::to_string);
        let normal_barcode = record.value(MATCHED_NORM_SAMPLE_BARCODE).map(str::to_string);
        let coordinate = CoordinateKey::from_record(record, contigs)?;
        Ok(Self::new(tumor_barcode, normal_barcode, coordinate))
    }

    /// Tumor sample barcode.
    pub fn tumor_barcode(&self) -> Option<&str> {
        self.tumor_barcode.as_deref()
    }

    /// Matched normal sample barcode.
    pub fn normal_barcode(&self) -> Option<&str> {
        self.normal_barcode.as_deref()
    }

    /// Coordinate part of the key.
    pub fn coordinate(&self) -> &CoordinateKey {
        &self.coordinate
    }
}

impl Ord for BarcodesAndCoordinateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nullable(self.tumor_barcode(), other.tumor_barcode())
            .then_with(|| compare_nullable(self.normal_barcode(), other.normal_barcode()))
            .then_with(|| self.coordinate.cmp(&other.coordinate))
    }
}

impl PartialOrd for BarcodesAndCoordinateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BarcodesAndCoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            Nullable(self.tumor_barcode.as_ref()),
            Nullable(self.normal_barcode.as_ref()),
            self.coordinate
        )
    }
}

/// Key produced by a sort order's key function.
///
/// A single ordering only ever produces one variant, so keys from the same
/// ordering always compare field by field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortOrderKey {
    /// Produced by `Coordinate`.
    Coordinate(CoordinateKey),
    /// Produced by `BarcodesAndCoordinate`.
    BarcodesAndCoordinate(BarcodesAndCoordinateKey),
}

impl fmt::Display for SortOrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate(key) => fmt::Display::fmt(key, f),
            Self::BarcodesAndCoordinate(key) => fmt::Display::fmt(key, f),
        }
    }
}
