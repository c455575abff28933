#![cfg(feature = "serde")]

use maflib::{SortOrder, SortOrderConfig};

#[test]
fn config_round_trips_through_json() {
    let config = SortOrderConfig::new("Coordinate").with_contigs(["chr1", "chr2"]);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: SortOrderConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn config_contig_sources_default_to_none() {
    let parsed: SortOrderConfig = serde_json::from_str(r#"{"sort_order":"Unsorted"}"#).unwrap();
    assert_eq!(parsed, SortOrderConfig::new("Unsorted"));
    assert_eq!(parsed.build().unwrap(), SortOrder::Unsorted);
}

#[test]
fn sort_order_serializes_as_its_name() {
    let json = serde_json::to_string(&SortOrder::BarcodesAndCoordinate { contigs: None }).unwrap();
    assert_eq!(json, r#""BarcodesAndCoordinate""#);
    assert_eq!(
        serde_json::from_str::<SortOrder>(r#""Unknown""#).unwrap(),
        SortOrder::Unknown
    );
    assert!(serde_json::from_str::<SortOrder>(r#""Queryname""#).is_err());
}
