//! Catalog behavior exercised strictly through the public contract.

use medley_core::catalog::{Catalog, CatalogError};
use medley_core::content::{Content, ContentKind, Movie, Song};

#[test]
fn test_demo_catalog_composition() {
    let catalog = Catalog::demo();

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.movies().count(), 2);
    assert_eq!(catalog.songs().count(), 2);

    let kinds: Vec<ContentKind> = catalog.iter().map(|entry| entry.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ContentKind::Movie,
            ContentKind::Movie,
            ContentKind::Song,
            ContentKind::Song,
        ]
    );
}

#[test]
fn test_play_matches_entry_output() {
    let catalog = Catalog::demo();

    for position in 1..=catalog.len() {
        let entry = catalog.get(position - 1).expect("entry within bounds");
        assert_eq!(catalog.play(position).unwrap(), entry.play());
    }
}

#[test]
fn test_out_of_range_reports_catalog_size() {
    let catalog = Catalog::demo();

    let err = catalog.play(12).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::SelectionOutOfRange {
            selected: 12,
            available: 4
        }
    ));
}

#[test]
fn test_entries_mirror_describe() {
    let catalog = Catalog::demo();

    for (entry, summary) in catalog.iter().zip(catalog.entries()) {
        assert_eq!(summary.description, entry.describe());
        assert_eq!(summary.kind, entry.kind());
    }
}

#[test]
fn test_custom_catalog_preserves_insertion_order() {
    let mut catalog = Catalog::new();
    catalog.add(Box::new(Song::new("Opening Theme", 2.0, 96.0, "Free")));
    catalog.add(Box::new(Movie::new("Credits", 1.0, "1080p", "Nobody")));

    let entries = catalog.entries();
    assert_eq!(entries[0].description, "Song: Opening Theme (2 minutes)");
    assert_eq!(entries[1].description, "Movie: Credits (1 minutes)");
}

#[test]
fn test_trait_object_queries_are_pure() {
    let catalog = Catalog::demo();
    let entry = catalog.get(0).expect("demo catalog is not empty");

    assert_eq!(entry.describe(), entry.describe());
    assert_eq!(entry.play(), entry.play());
    assert_eq!(entry.compression_ratio(), entry.compression_ratio());
    assert!(entry.info().duration_minutes() >= 0.0);
}
