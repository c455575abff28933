//! Contig ordering used to rank chromosomes.
//!
//! A [`ContigIndex`] is an ordered list of contig names; a contig's position
//! in the list is its rank. The list usually comes from the first column of a
//! FASTA index (`.fai`), one contig per line.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SortOrderError};

/// Column separator of a FASTA index.
const INDEX_SEPARATOR: char = '\t';

/// Ordered, immutable list of contig names.
///
/// Duplicate names are dropped; a contig keeps the rank of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContigIndex {
    names: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl ContigIndex {
    /// Build an index from contig names in rank order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for name in names {
            index.push(name.into());
        }
        index
    }

    /// Load the first column of a FASTA index file.
    pub fn from_fasta_index<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| SortOrderError::ContigIndexIo {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let index = Self::from_reader(BufReader::new(file)).map_err(io_error)?;
        debug!(path = %path.display(), contigs = index.len(), "loaded contig index");
        Ok(index)
    }

    /// Read contig names from the first tab-delimited column of each line.
    ///
    /// Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut index = Self::default();
        for line in reader.lines() {
            let line = line?;
            let name = line
                .trim_end_matches(['\r', '\n'])
                .split(INDEX_SEPARATOR)
                .next()
                .unwrap_or_default();
            if !name.is_empty() {
                index.push(name.to_string());
            }
        }
        Ok(index)
    }

    fn push(&mut self, name: String) {
        if !self.ranks.contains_key(&name) {
            self.ranks.insert(name.clone(), self.names.len());
            self.names.push(name);
        }
    }

    /// Rank of the named contig.
    pub fn rank(&self, contig: &str) -> Result<usize> {
        self.ranks
            .get(contig)
            .copied()
            .ok_or_else(|| SortOrderError::UnknownContig {
                contig: contig.to_string(),
                known: self.names.clone(),
            })
    }

    /// Whether the contig is part of the index.
    pub fn contains(&self, contig: &str) -> bool {
        self.ranks.contains_key(contig)
    }

    /// Contig names in rank order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index holds no contigs.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ContigIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_list_order() {
        let index = ContigIndex::from_names(["chr1", "chr2", "chrX"]);
        assert_eq!(index.rank("chr1").unwrap(), 0);
        assert_eq!(index.rank("chrX").unwrap(), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn reads_first_column_of_fai() {
        let fai = "chr1\t248956422\t112\t70\t71\r\nchr2\t242193529\t252513167\t70\t71\n\nchrM\t16569\t3\t70\t71";
        let index = ContigIndex::from_reader(fai.as_bytes()).unwrap();
        assert_eq!(index.names(), ["chr1", "chr2", "chrM"]);
    }

    #[test]
    fn duplicates_keep_first_rank() {
        let index: ContigIndex = ["chr1", "chr2", "chr1"].into_iter().collect();
        assert_eq!(index.rank("chr1").unwrap(), 0);
        assert_eq!(index.rank("chr2").unwrap(), 1);
        assert_eq!(index.names(), ["chr1", "chr2"]);
    }

    #[test]
    fn unknown_contig_lists_known_names() {
        let index = ContigIndex::from_names(["chr1", "chr2", "chr3"]);
        let err = index.rank("chr22").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find contig 'chr22' in list of contigs: chr1, chr2, chr3"
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ContigIndex::from_fasta_index("/nonexistent/ref.fa.fai").unwrap_err();
        assert!(matches!(err, SortOrderError::ContigIndexIo { .. }));
        assert!(err.to_string().contains("/nonexistent/ref.fa.fai"));
    }
}
