use std::path::PathBuf;

use tracing::debug;

use crate::contig::ContigIndex;
use crate::error::{Result, SortOrderError};

use super::sort_order::SortOrder;

/// Declared sort order as read from a header, a config file or the command
/// line.
///
/// At most one contig source may be given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOrderConfig {
    /// Sort order name, e.g. `Coordinate`
    pub sort_order: String,
    /// FASTA index whose first column ranks the contigs
    #[cfg_attr(feature = "serde", serde(default))]
    pub fasta_index: Option<PathBuf>,
    /// Contig names in rank order
    #[cfg_attr(feature = "serde", serde(default))]
    pub contigs: Option<Vec<String>>,
}

impl SortOrderConfig {
    /// Configuration for the named order without a contig index.
    pub fn new(sort_order: impl Into<String>) -> Self {
        Self {
            sort_order: sort_order.into(),
            fasta_index: None,
            contigs: None,
        }
    }

    /// Rank contigs by the given FASTA index.
    pub fn with_fasta_index(mut self, path: impl Into<PathBuf>) -> Self {
        self.fasta_index = Some(path.into());
        self
    }

    /// Rank contigs by the given list.
    pub fn with_contigs<I, S>(mut self, contigs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contigs = Some(contigs.into_iter().map(Into::into).collect());
        self
    }

    /// Load the configured contig index, if any.
    pub fn contig_index(&self) -> Result<Option<ContigIndex>> {
        match (&self.fasta_index, &self.contigs) {
            (Some(_), Some(_)) => Err(SortOrderError::ConflictingContigSources),
            (Some(path), None) => ContigIndex::from_fasta_index(path).map(Some),
            (None, Some(contigs)) => Ok(Some(ContigIndex::from_names(contigs.iter().cloned()))),
            (None, None) => Ok(None),
        }
    }

    /// Resolve the named order and attach its contig index.
    ///
    /// Contig sources are ignored for orders without keys.
    pub fn build(&self) -> Result<SortOrder> {
        if self.fasta_index.is_some() && self.contigs.is_some() {
            return Err(SortOrderError::ConflictingContigSources);
        }
        let order = SortOrder::find(&self.sort_order)?;
        if !order.supports_sort_key() {
            return Ok(order);
        }
        let order = match self.contig_index()? {
            Some(contigs) => order.with_contigs(contigs),
            None => order,
        };
        debug!(
            sort_order = order.name(),
            contigs = order.contigs().map_or(0, ContigIndex::len),
            "configured sort order"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_contig_list() {
        let order = SortOrderConfig::new("Coordinate")
            .with_contigs(["chr1", "chr2"])
            .build()
            .unwrap();
        assert_eq!(order.name(), "Coordinate");
        assert_eq!(order.contigs().map(ContigIndex::len), Some(2));
    }

    #[test]
    fn rejects_two_contig_sources() {
        let config = SortOrderConfig::new("Coordinate")
            .with_contigs(["chr1"])
            .with_fasta_index("ref.fa.fai");
        assert!(matches!(
            config.build(),
            Err(SortOrderError::ConflictingContigSources)
        ));
    }

    #[test]
    fn unsorted_ignores_contigs() {
        let order = SortOrderConfig::new("Unsorted")
            .with_fasta_index("/nonexistent.fai")
            .build()
            .unwrap();
        assert_eq!(order, SortOrder::Unsorted);
    }

    #[test]
    fn unknown_name_fails() {
        assert!(matches!(
            SortOrderConfig::new("Sorted").build(),
            Err(SortOrderError::UnknownOrderingName { .. })
        ));
    }
}
