use super::*;
use crate::domain::seed_products;

#[test]
fn starts_in_create_mode_with_empty_draft() {
    let form = FormController::new();
    assert_eq!(form.mode(), &FormMode::Create);
    assert!(form.draft().is_empty());
    assert_eq!(form.submit_label(), "Add Product");
}

#[test]
fn select_for_edit_copies_row_and_switches_label() {
    let jeans = seed_products().remove(1);
    let mut form = FormController::new();
    form.select_for_edit(&jeans);

    assert_eq!(form.draft(), &jeans);
    assert_eq!(
        form.mode(),
        &FormMode::Edit {
            target: ProductId::from("P002")
        }
    );
    assert_eq!(form.submit_label(), "Update Product");
}

#[test]
fn clear_returns_to_create_mode() {
    let mut form = FormController::new();
    form.select_for_edit(&seed_products()[0]);
    form.clear();

    assert_eq!(form.mode(), &FormMode::Create);
    assert_eq!(form.draft(), &Product::empty());
}

#[test]
fn set_field_touches_exactly_one_field() {
    let mut form = FormController::new();
    form.select_for_edit(&seed_products()[0]);
    form.set_field(ProductField::Color, "Green");

    let mut expected = seed_products().remove(0);
    expected.color = "Green".to_string();
    assert_eq!(form.draft(), &expected);
}

#[test]
fn price_input_parsing() {
    let mut form = FormController::new();

    form.set_field(ProductField::Price, " 12.5 ");
    assert_eq!(form.draft().price, 12.5);

    form.set_field(ProductField::Price, "abc");
    assert_eq!(form.draft().price, 12.5);

    form.set_field(ProductField::Price, "inf");
    assert_eq!(form.draft().price, 12.5);

    form.set_field(ProductField::Price, "");
    assert_eq!(form.draft().price, 0.0);

    form.set_field(ProductField::Price, "-3");
    assert_eq!(form.draft().price, -3.0);
}

#[test]
fn submit_with_empty_id_fails_and_changes_nothing() {
    let catalog = Catalog::seeded();
    let mut form = FormController::new();
    form.set_field(ProductField::Name, "Hoodie");
    let before = form.clone();

    let err = form.submit(&catalog).expect_err("empty id must be rejected");
    assert_eq!(err, ValidationError::MissingProductId);
    assert_eq!(err.to_string(), "Product ID is required!");
    assert_eq!(form, before);
}

#[test]
fn whitespace_id_counts_as_present() {
    let mut form = FormController::new();
    form.set_field(ProductField::ProductId, " ");
    let catalog = form.submit(&Catalog::empty()).expect("submit");
    assert_eq!(catalog.len(), 1);
}

#[test]
fn successful_submit_resets_form() {
    let mut form = FormController::new();
    form.set_field(ProductField::ProductId, "P003");
    let catalog = form.submit(&Catalog::seeded()).expect("submit");

    assert_eq!(catalog.len(), 3);
    assert_eq!(form.mode(), &FormMode::Create);
    assert!(form.draft().is_empty());
}

#[test]
fn edit_submit_with_renamed_id_updates_nothing() {
    let seeded = Catalog::seeded();
    let mut form = FormController::new();
    form.select_for_edit(&seed_products()[1]);
    form.set_field(ProductField::ProductId, "P777");

    let catalog = form.submit(&seeded).expect("submit");
    assert_eq!(catalog, seeded);
    assert_eq!(form.mode(), &FormMode::Create);
}
