//! # Sort orders for mutation annotation records
//!
//! Tab-delimited mutation annotation files declare how their rows are
//! ordered. This crate implements those orderings and the machinery to
//! enforce them:
//!
//! 1. **Registry**: [`SortOrder`] enumerates `Unknown`, `Unsorted`,
//!    `BarcodesAndCoordinate` and `Coordinate`, looked up by name
//! 2. **Contig ranking**: [`ContigIndex`] ranks chromosomes from a FASTA
//!    index or an explicit list
//! 3. **Keys**: [`SortKeyFn`] derives a [`SortOrderKey`] from any [`Record`]
//! 4. **Validation**: [`SortOrderChecker`] and [`SortOrderEnforcingIterator`]
//!    reject records that arrive out of order, one record at a time
//!
//! ## Usage Example
//!
//! ```
//! use std::sync::Arc;
//! use maflib::{ContigIndex, EnforceSortOrder, MafRecord, SortOrder};
//!
//! let columns: Arc<[String]> = ["Chromosome", "Start_Position", "End_Position"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let records = ["chr1\t10\t10", "chr2\t5\t5", "chr1\t20\t20"]
//!     .iter()
//!     .map(|line| MafRecord::from_line(Arc::clone(&columns), line))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let order = SortOrder::find("Coordinate")?
//!     .with_contigs(ContigIndex::from_names(["chr1", "chr2"]));
//! let results: Vec<_> = records.iter().enforce_sort_order(&order).collect();
//! assert!(results[0].is_ok() && results[1].is_ok());
//! assert!(results[2].is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod contig; // Chromosome ranking
pub mod error; // Error taxonomy
pub mod order; // Orderings, keys, checking
pub mod record; // Record contracts

pub use contig::ContigIndex;
pub use error::{Result, SortOrderError};
pub use order::{
    BarcodesAndCoordinateKey, CoordinateKey, EnforceSortOrder, SortKeyFn, SortOrder,
    SortOrderChecker, SortOrderConfig, SortOrderEnforcingIterator, SortOrderKey,
};
pub use record::{Locatable, MafRecord, Record, RecordError};
