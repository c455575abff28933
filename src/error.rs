//! Error types raised by sort order lookup, key derivation and order checking.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the sort order machinery.
pub type Result<T> = std::result::Result<T, SortOrderError>;

/// Errors that can occur while resolving, applying or checking a sort order.
#[derive(Debug, Error)]
pub enum SortOrderError {
    /// No registered sort order carries the requested name.
    #[error("Could not find sort order '{name}', options: {}", options.join(", "))]
    UnknownOrderingName {
        /// Name that was looked up
        name: String,
        /// Every registered sort order name, in registry order
        options: Vec<String>,
    },

    /// The ordering declares no key (`Unknown` or `Unsorted`).
    #[error("Sorting not supported for {name} order")]
    UnsupportedOrdering {
        /// Name of the ordering
        name: &'static str,
    },

    /// The record cannot report chromosome, start and end.
    #[error("Record of type '{type_name}' is not locatable")]
    MissingCapability {
        /// Concrete type of the offending record
        type_name: &'static str,
    },

    /// The chromosome is absent from the configured contig index.
    #[error("Could not find contig '{contig}' in list of contigs: {}", known.join(", "))]
    UnknownContig {
        /// Chromosome value of the record
        contig: String,
        /// Contigs of the index, in rank order
        known: Vec<String>,
    },

    /// A record sorts strictly before the record preceding it.
    #[error("Records out of order\n{previous}\n{current}")]
    OrderViolation {
        /// String form of the previously accepted record
        previous: String,
        /// String form of the offending record
        current: String,
    },

    /// Both a FASTA index path and an explicit contig list were supplied.
    #[error("Provide either a FASTA index or a list of contigs, not both")]
    ConflictingContigSources,

    /// The contig index file could not be read.
    #[error("Failed to read contig index {}: {source}", path.display())]
    ContigIndexIo {
        /// Path of the index file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl SortOrderError {
    /// Whether this error reports records delivered out of order.
    pub fn is_order_violation(&self) -> bool {
        matches!(self, Self::OrderViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_lists_options() {
        let err = SortOrderError::UnknownOrderingName {
            name: "Chaos".to_string(),
            options: vec!["Unknown".to_string(), "Coordinate".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Could not find sort order 'Chaos', options: Unknown, Coordinate"
        );
    }

    #[test]
    fn order_violation_contains_both_records() {
        let err = SortOrderError::OrderViolation {
            previous: "chr2\t10\t20".to_string(),
            current: "chr1\t5\t6".to_string(),
        };
        assert!(err.is_order_violation());
        assert_eq!(err.to_string(), "Records out of order\nchr2\t10\t20\nchr1\t5\t6");
    }
}
