use super::*;

fn product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        ..Product::default()
    }
}

#[test]
fn seeded_catalog_holds_two_records_in_order() {
    let catalog = Catalog::seeded();
    let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["P001", "P002"]);
    assert_eq!(catalog.get(1).map(|p| p.name.as_str()), Some("Jeans"));
}

#[test]
fn add_appends_and_leaves_previous_snapshot_untouched() {
    let before = Catalog::seeded();
    let after = before.add(product("P003", "Hoodie"));

    assert_eq!(before.len(), 2);
    assert_eq!(after.len(), 3);
    assert_eq!(after.get(2), Some(&product("P003", "Hoodie")));
}

#[test]
fn add_keeps_both_entries_when_ids_collide() {
    let catalog = Catalog::seeded().add(product("P001", "Duplicate"));
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.iter().filter(|p| p.id.as_str() == "P001").count(),
        2
    );
}

#[test]
fn update_replaces_in_place() {
    let mut jeans = Catalog::seeded().get(1).cloned().expect("seed row");
    jeans.color = "Black".to_string();

    let catalog = Catalog::seeded().update(jeans.clone());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0), Catalog::seeded().get(0));
    assert_eq!(catalog.get(1), Some(&jeans));
}

#[test]
fn update_without_match_is_a_no_op() {
    let before = Catalog::seeded();
    let after = before.update(product("P999", "Ghost"));
    assert_eq!(after, before);
}

#[test]
fn update_rewrites_every_duplicate() {
    let catalog = Catalog::new(vec![
        product("X", "first"),
        product("Y", "middle"),
        product("X", "second"),
    ]);
    let updated = catalog.update(product("X", "patched"));
    let names: Vec<&str> = updated.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["patched", "middle", "patched"]);
}

#[test]
fn remove_drops_all_matches_and_is_idempotent() {
    let catalog = Catalog::seeded().add(product("P001", "Duplicate"));
    let once = catalog.remove(&ProductId::from("P001"));
    let twice = once.remove(&ProductId::from("P001"));

    assert_eq!(once.len(), 1);
    assert_eq!(once, twice);
    assert!(!once.contains(&ProductId::from("P001")));
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let before = Catalog::seeded();
    assert_eq!(before.remove(&ProductId::from("nope")), before);
}

#[test]
fn find_returns_first_match() {
    let catalog = Catalog::new(vec![product("A", "one"), product("A", "two")]);
    assert_eq!(
        catalog.find(&ProductId::from("A")).map(|p| p.name.as_str()),
        Some("one")
    );
    assert!(Catalog::empty().find(&ProductId::from("A")).is_none());
}
