//! Record contracts consumed by the sort order machinery.
//!
//! Orderings never look inside a record beyond two capabilities:
//!
//! - [`Locatable`]: the chromosome, start and end of the annotated variant
//! - [`Record::value`]: lookup of a column value by name (used for barcodes)
//!
//! [`MafRecord`] is a concrete in-memory record keyed by column name.

mod maf;

pub use maf::{MafRecord, RecordError, COLUMN_SEPARATOR};

use std::fmt;

/// Column holding the chromosome (contig) name.
pub const CHROMOSOME: &str = "Chromosome";
/// Column holding the 1-based start position.
pub const START_POSITION: &str = "Start_Position";
/// Column holding the 1-based end position.
pub const END_POSITION: &str = "End_Position";
/// Column holding the tumor sample barcode.
pub const TUMOR_SAMPLE_BARCODE: &str = "Tumor_Sample_Barcode";
/// Column holding the matched normal sample barcode.
pub const MATCHED_NORM_SAMPLE_BARCODE: &str = "Matched_Norm_Sample_Barcode";

/// Anything positioned on a reference genome.
///
/// Implementing `Locatable` alone does not make a record orderable by
/// coordinate: the record's [`Record::as_locatable`] must also return
/// `Some(self)`, since its default is `None`.
pub trait Locatable {
    /// Contig name, if known.
    fn chromosome(&self) -> Option<&str>;

    /// Start position, if known.
    fn start(&self) -> Option<i64>;

    /// End position, if known.
    fn end(&self) -> Option<i64>;
}

/// A row that can take part in a sort order.
///
/// The `Display` form is what order violation errors report.
///
/// # Locatable records
///
/// Coordinate orderings reach a record's position only through
/// [`as_locatable`](Record::as_locatable), which returns `None` unless
/// overridden. A type that also implements [`Locatable`] must override it,
/// otherwise keying fails with
/// [`MissingCapability`](crate::SortOrderError::MissingCapability):
///
/// ```
/// use std::fmt;
/// use maflib::{Locatable, Record, SortOrder};
///
/// struct Snv(i64);
///
/// impl Locatable for Snv {
///     fn chromosome(&self) -> Option<&str> { Some("chr1") }
///     fn start(&self) -> Option<i64> { Some(self.0) }
///     fn end(&self) -> Option<i64> { Some(self.0) }
/// }
///
/// impl Record for Snv {
///     fn value(&self, _field: &str) -> Option<&str> { None }
///     fn as_locatable(&self) -> Option<&dyn Locatable> { Some(self) }
/// }
///
/// impl fmt::Display for Snv {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "chr1:{}", self.0)
///     }
/// }
///
/// let key_fn = SortOrder::find("Coordinate")?.sort_key()?;
/// assert!(key_fn.compare(&Snv(1), &Snv(2))?.is_lt());
/// # Ok::<(), maflib::SortOrderError>(())
/// ```
pub trait Record: fmt::Display {
    /// Value of the named column, or `None` when the column is absent or empty.
    fn value(&self, field: &str) -> Option<&str>;

    /// The record's genomic position, if it has one.
    ///
    /// Records that return `None` cannot be ordered by coordinate.
    fn as_locatable(&self) -> Option<&dyn Locatable> {
        None
    }

    /// Name of the concrete record type, used in error messages.
    ///
    /// Wrappers such as `Box<dyn Record>` forward to the record they hold.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }

    fn as_locatable(&self) -> Option<&dyn Locatable> {
        (**self).as_locatable()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }

    fn as_locatable(&self) -> Option<&dyn Locatable> {
        (**self).as_locatable()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
