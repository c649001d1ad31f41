//! The four symbol-table variants and their divergent upsert
//! semantics, pinned explicitly so nobody "fixes" one of them.

use arithlang::symtab::{
    HashedSymbolTable, LineDirection, Metadata, OrderedSymbolTable, SymbolTable, TreeSymbolTable,
    UnorderedSymbolTable,
};

fn meta(counter: u32, name: &str) -> Metadata {
    Metadata {
        counter,
        variable_name: name.to_string(),
        object_address: format!("0x{counter:04x}"),
        type_name: "int".to_string(),
        dimension: None,
        line_direction: LineDirection::Horizontal,
        line_reference: None,
    }
}

// -----------------------------------------------------------
// Duplicate-insert policy per variant.
// -----------------------------------------------------------

#[test]
fn ordered_table_keeps_first_write() {
    let mut table = OrderedSymbolTable::new();
    table.insert("x", 1);
    table.insert("x", 2);
    assert_eq!(table.lookup("x"), Some(&1));
}

#[test]
fn ordered_table_appends_duplicates() {
    let mut table = OrderedSymbolTable::new();
    table.insert("x", 1);
    table.insert("x", 2);
    table.insert("x", 3);
    // append-only: every insert is stored, even under one name
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("x"), Some(&1));
}

#[test]
fn unordered_table_keeps_last_write() {
    let mut table = UnorderedSymbolTable::new();
    table.insert("x", 1);
    table.insert("x", 2);
    assert_eq!(table.lookup("x"), Some(&2));
    assert_eq!(table.len(), 1);
}

#[test]
fn tree_table_ignores_second_write() {
    let mut table = TreeSymbolTable::new();
    table.insert("x", 1);
    table.insert("x", 2);
    assert_eq!(table.lookup("x"), Some(&1));
    assert_eq!(table.len(), 1);
}

#[test]
fn hashed_table_keeps_last_write() {
    let mut table = HashedSymbolTable::new(10);
    table.insert("x", 1);
    table.insert("x", 2);
    assert_eq!(table.lookup("x"), Some(&2));
    assert_eq!(table.len(), 1);
}

// -----------------------------------------------------------
// Lookup basics shared by all variants.
// -----------------------------------------------------------

#[test]
fn missing_name_returns_none_not_an_error() {
    let mut ordered = OrderedSymbolTable::new();
    let mut unordered = UnorderedSymbolTable::new();
    let mut tree = TreeSymbolTable::new();
    let mut hashed = HashedSymbolTable::new(8);
    for table in [
        &mut ordered as &mut dyn SymbolTable<i32>,
        &mut unordered,
        &mut tree,
        &mut hashed,
    ] {
        table.insert("present", 7);
        assert_eq!(table.lookup("present"), Some(&7));
        assert_eq!(table.lookup("absent"), None);
    }
}

#[test]
fn distinct_names_stay_distinct() {
    let mut table = UnorderedSymbolTable::new();
    table.insert("a", 1);
    table.insert("b", 2);
    table.insert("c", 3);
    assert_eq!(table.lookup("b"), Some(&2));
    assert_eq!(table.len(), 3);
}

#[test]
fn tree_handles_skewed_insertion_order() {
    let mut table = TreeSymbolTable::new();
    // strictly ascending names degenerate into a right spine
    for (i, name) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        table.insert(name, i);
    }
    for (i, name) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        assert_eq!(table.lookup(name), Some(&i));
    }
}

#[test]
fn hashed_table_survives_heavy_collisions() {
    let mut table = HashedSymbolTable::new(3);
    for i in 0..50_u32 {
        table.insert(&format!("sym{i}"), i);
    }
    assert_eq!(table.len(), 50);
    for i in 0..50_u32 {
        assert_eq!(table.lookup(&format!("sym{i}")), Some(&i));
    }
    assert_eq!(table.lookup("sym50"), None);
}

#[test]
fn empty_tables_report_empty() {
    assert!(OrderedSymbolTable::<i32>::new().is_empty());
    assert!(UnorderedSymbolTable::<i32>::new().is_empty());
    assert!(TreeSymbolTable::<i32>::new().is_empty());
    assert!(HashedSymbolTable::<i32>::new(4).is_empty());
}

#[test]
#[should_panic(expected = "bucket count must be non-zero")]
fn hashed_table_rejects_zero_buckets() {
    let _ = HashedSymbolTable::<i32>::new(0);
}

// -----------------------------------------------------------
// Metadata records as values.
// -----------------------------------------------------------

#[test]
fn metadata_round_trips_through_every_variant() {
    let mut ordered = OrderedSymbolTable::new();
    let mut unordered = UnorderedSymbolTable::new();
    let mut tree = TreeSymbolTable::new();
    let mut hashed = HashedSymbolTable::new(10);

    let record = meta(1, "x");
    ordered.insert("x", record.clone());
    unordered.insert("x", record.clone());
    tree.insert("x", record.clone());
    hashed.insert("x", record.clone());

    assert_eq!(ordered.lookup("x"), Some(&record));
    assert_eq!(unordered.lookup("x"), Some(&record));
    assert_eq!(tree.lookup("x"), Some(&record));
    assert_eq!(hashed.lookup("x"), Some(&record));
}

#[test]
fn metadata_fields_are_plain_data() {
    let record = meta(4, "w");
    assert_eq!(record.counter, 4);
    assert_eq!(record.variable_name, "w");
    assert_eq!(record.object_address, "0x0004");
    assert_eq!(record.dimension, None);
    assert_eq!(record.line_direction, LineDirection::Horizontal);
    assert_eq!(record.line_reference, None);
}
