use periodic::{Element, ElementField, PeriodicTable};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn every_atomic_number_finds_its_element() {
    let table = PeriodicTable::new();
    for e in &table {
        let found = table.search_by_atomic_number(i64::from(e.atomic())).unwrap();
        assert_eq!(found.atomic(), e.atomic());
    }
}

#[test]
fn every_symbol_finds_its_element_in_any_case() {
    let table = PeriodicTable::new();
    for e in &table {
        for query in [e.symbol().to_string(), e.symbol().to_lowercase(), e.symbol().to_uppercase()] {
            let found = table.search_by_symbol(&query).unwrap();
            assert!(found.symbol().eq_ignore_ascii_case(e.symbol()), "{query}");
        }
    }
}

#[test]
fn every_name_spelling_finds_its_element() {
    let table = PeriodicTable::new();
    for e in &table {
        let mut queries = vec![e.name().to_string(), e.name().to_uppercase(), e.name().to_lowercase()];
        if e.has_british_variant() {
            queries.push(e.british_name().to_string());
            queries.push(e.british_name().to_uppercase());
        }
        for query in queries {
            let found = table.search_by_name(&query).unwrap();
            assert!(found.is_named_as(&query), "{query}");
        }
    }
}

#[test]
fn names_are_unique_in_the_builtin_table() {
    let table = PeriodicTable::new();
    for e in &table {
        assert_eq!(table.search_by_name(e.name()), Some(e));
    }
}

#[test]
fn unknown_keys_are_not_found() {
    let table = PeriodicTable::new();
    assert!(table.search_by_atomic_number(0).is_none());
    assert!(table.search_by_atomic_number(200).is_none());
    assert!(table.search_by_atomic_number(-3).is_none());
    assert!(table.search_by_atomic_number(117).is_none());
    assert!(table.search_by_symbol("Xx").is_none());
    assert!(table.search_by_symbol("").is_none());
    assert!(table.search_by_name("").is_none());
    assert!(table.search_by_name("Unobtainium").is_none());
}

#[test]
fn hydrogen() {
    let h = PeriodicTable::new().search_by_atomic_number(1).cloned().unwrap();
    assert_eq!(h.atomic(), 1);
    assert_eq!(h.name(), "Hydrogen");
    assert_eq!(h.symbol(), "H");
    assert!(approx_eq(h.mass(), 1.00794, 1e-9));
    assert_eq!(h.british_name(), "Hydrogen");
}

#[test]
fn iron_by_symbol_in_either_case() {
    let table = PeriodicTable::new();
    for query in ["fe", "Fe"] {
        let fe = table.search_by_symbol(query).unwrap();
        assert_eq!(fe.symbol(), "Fe");
        assert_eq!(fe.name(), "Iron");
    }
}

#[test]
fn sulfur_answers_to_both_spellings() {
    let table = PeriodicTable::new();
    let s = table.search_by_atomic_number(16).unwrap();
    assert_eq!(s.name(), "Sulfur");
    assert_eq!(s.british_name(), "Sulphur");
    for name in ["sulfur", "Sulfur", "Sulphur"] {
        assert!(s.is_named_as(name), "{name}");
    }
}

#[test]
fn aluminium_resolves_to_canonical_aluminum() {
    let table = PeriodicTable::new();
    let al = table.search_by_name("Aluminium").unwrap();
    assert_eq!(al.symbol(), "Al");
    assert_eq!(al.name(), "Aluminum");
}

#[test]
fn field_search_matches_dedicated_queries() {
    let table = PeriodicTable::shared();
    assert_eq!(
        table.search(ElementField::Atomic, "79"),
        table.search_by_atomic_number(79)
    );
    assert_eq!(
        table.search("symbol".parse().unwrap(), "au"),
        table.search_by_symbol("Au")
    );
    assert_eq!(table.search(ElementField::Name, "gold").unwrap().atomic(), 79);
}

#[test]
fn british_spellings_resolve_through_field_search() {
    let table = PeriodicTable::shared();
    assert_eq!(table.search(ElementField::Name, "Aluminium").unwrap().symbol(), "Al");
    assert_eq!(table.search(ElementField::Name, "Sulphur").unwrap().symbol(), "S");
    assert!(table.search(ElementField::Name, "Caesium").is_none());
}

#[test]
fn custom_tables_resolve_ties_in_declared_order() {
    let table = PeriodicTable::from_elements(vec![
        Element::new(55, "Cesium", "Cs", 132.9054519).with_british_name("Caesium"),
        Element::new(58, "Cesium", "Ce", 140.116),
    ])
    .unwrap();
    assert_eq!(table.search_by_name("cesium").unwrap().atomic(), 55);
    assert_eq!(table.search_by_name("CAESIUM").unwrap().atomic(), 55);
    assert_eq!(table.search_by_symbol("ce").unwrap().atomic(), 58);
}

#[test]
fn shared_table_is_usable_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|n| std::thread::spawn(move || PeriodicTable::shared().search_by_atomic_number(n).map(Element::atomic)))
        .collect();
    let found: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(found, vec![Some(1), Some(2), Some(3), Some(4)]);
}
