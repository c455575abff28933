//! Record builders shared by the integration tests

#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use maflib::record::{
    CHROMOSOME, END_POSITION, MATCHED_NORM_SAMPLE_BARCODE, START_POSITION, TUMOR_SAMPLE_BARCODE,
};
use maflib::{MafRecord, Record};

/// Columns used by every test record, barcodes first.
pub fn columns() -> Arc<[String]> {
    [
        TUMOR_SAMPLE_BARCODE,
        MATCHED_NORM_SAMPLE_BARCODE,
        CHROMOSOME,
        START_POSITION,
        END_POSITION,
    ]
    .iter()
    .map(|column| column.to_string())
    .collect()
}

/// Record with empty barcodes at the given position.
pub fn site(chrom: &str, start: i64, end: i64) -> MafRecord {
    barcoded(None, None, chrom, Some(start), Some(end))
}

/// Record with every key field spelled out; `None` leaves the cell empty.
pub fn barcoded(
    tumor: Option<&str>,
    normal: Option<&str>,
    chrom: &str,
    start: Option<i64>,
    end: Option<i64>,
) -> MafRecord {
    row(tumor, normal, Some(chrom), start, end)
}

/// Record with an empty chromosome cell.
pub fn unplaced(start: i64, end: i64) -> MafRecord {
    row(None, None, None, Some(start), Some(end))
}

fn row(
    tumor: Option<&str>,
    normal: Option<&str>,
    chrom: Option<&str>,
    start: Option<i64>,
    end: Option<i64>,
) -> MafRecord {
    let values = vec![
        tumor.map(str::to_string),
        normal.map(str::to_string),
        chrom.map(str::to_string),
        start.map(|start| start.to_string()),
        end.map(|end| end.to_string()),
    ];
    MafRecord::new(columns(), values).expect("test record is well formed")
}

/// A record type with no genomic position.
#[derive(Debug, Clone)]
pub struct GeneSummary(pub &'static str);

impl Record for GeneSummary {
    fn value(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl fmt::Display for GeneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
