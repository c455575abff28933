//! Key derivation and order checking throughput

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maflib::{ContigIndex, EnforceSortOrder, MafRecord, SortOrder};

const CONTIGS: [&str; 3] = ["chr1", "chr2", "chr3"];

fn records(count: i64) -> Vec<MafRecord> {
    let columns: Arc<[String]> = [
        "Tumor_Sample_Barcode",
        "Matched_Norm_Sample_Barcode",
        "Chromosome",
        "Start_Position",
        "End_Position",
    ]
    .iter()
    .map(|column| column.to_string())
    .collect();

    (0..count)
        .map(|i| {
            let contig = CONTIGS[(i * CONTIGS.len() as i64 / count) as usize];
            let line = format!("TUMOR\tNORMAL\t{contig}\t{i}\t{}", i + 1);
            MafRecord::from_line(Arc::clone(&columns), &line).expect("valid record")
        })
        .collect()
}

fn benchmark_sort_orders(c: &mut Criterion) {
    let records = records(10_000);
    let coordinate = SortOrder::coordinate(ContigIndex::from_names(CONTIGS));
    let barcodes = SortOrder::barcodes_and_coordinate(ContigIndex::from_names(CONTIGS));

    c.bench_function("coordinate_keys_10k", |b| {
        let key_fn = coordinate.sort_key().expect("coordinate has keys");
        b.iter(|| {
            for record in &records {
                black_box(key_fn.key(record).expect("known contig"));
            }
        });
    });

    c.bench_function("enforce_barcodes_and_coordinate_10k", |b| {
        b.iter(|| {
            let passed = records
                .iter()
                .enforce_sort_order(&barcodes)
                .filter(Result::is_ok)
                .count();
            black_box(passed);
        });
    });

    c.bench_function("sort_reversed_10k", |b| {
        let reversed: Vec<_> = records.iter().rev().cloned().collect();
        b.iter(|| black_box(coordinate.sort(reversed.clone()).expect("sortable")));
    });
}

criterion_group!(benches, benchmark_sort_orders);
criterion_main!(benches);
