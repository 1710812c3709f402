//! Loading datasets from disk in both supported layouts.

use dataset::{DatasetError, load_dataset};
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;

const SELLERS: &str = r#"[
    {"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov", "position": "Senior Seller"},
    {"id": "seller_2", "first_name": "Ekaterina", "last_name": "Smirnova"}
]"#;

const PRODUCTS: &str = r#"[
    {"name": "Tea", "category": "Drinks", "sku": "SKU_001", "purchase_price": 12.35, "sale_price": 20},
    {"name": "Mug", "category": "Kitchen", "sku": "SKU_002", "purchase_price": 3, "sale_price": 7.5}
]"#;

const PURCHASE_RECORDS: &str = r#"[
    {
        "receipt_id": "receipt_1",
        "date": "2023-12-04",
        "seller_id": "seller_2",
        "customer_id": "customer_7",
        "items": [
            {"sku": "SKU_001", "discount": 0, "quantity": 2, "sale_price": 20},
            {"sku": "SKU_002", "discount": 10, "quantity": 1, "sale_price": 7.5}
        ],
        "bill": 47.5,
        "total_discount": 0.75,
        "total_amount": 46.75
    }
]"#;

const CUSTOMERS: &str = r#"[{"id": "customer_7", "first_name": "Olga", "last_name": "Ivanova"}]"#;

fn write_collections(dir: &Path) {
    fs::write(dir.join("sellers.json"), SELLERS).unwrap();
    fs::write(dir.join("products.json"), PRODUCTS).unwrap();
    fs::write(dir.join("purchase_records.json"), PURCHASE_RECORDS).unwrap();
    fs::write(dir.join("customers.json"), CUSTOMERS).unwrap();
}

#[test]
fn test_loads_directory_layout() {
    let dir = tempfile::tempdir().unwrap();
    write_collections(dir.path());

    let data = load_dataset(dir.path()).unwrap();

    assert_eq!(data.sellers.len(), 2);
    assert_eq!(data.products[0].purchase_price, dec!(12.35));
    assert_eq!(data.customers[0].id.as_deref(), Some("customer_7"));

    let record = &data.purchase_records[0];
    assert_eq!(record.total_amount, dec!(46.75));
    assert_eq!(record.receipt_id.as_deref(), Some("receipt_1"));
    assert_eq!(record.items[1].discount, dec!(10));
    assert_eq!(record.extra["bill"], 47.5);
}

#[test]
fn test_loads_bundle_file() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("data.json");
    fs::write(
        &bundle,
        format!(
            r#"{{"customers": {CUSTOMERS}, "products": {PRODUCTS}, "sellers": {SELLERS}, "purchase_records": {PURCHASE_RECORDS}}}"#
        ),
    )
    .unwrap();

    let data = load_dataset(&bundle).unwrap();
    assert_eq!(data.purchase_records.len(), 1);
    assert_eq!(data.sellers[1].full_name(), "Ekaterina Smirnova");
}

#[test]
fn test_directory_missing_a_collection() {
    let dir = tempfile::tempdir().unwrap();
    write_collections(dir.path());
    fs::remove_file(dir.path().join("customers.json")).unwrap();

    let err = load_dataset(dir.path()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingFile(path) if path.ends_with("customers.json")));
}

#[test]
fn test_empty_sellers_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    write_collections(dir.path());
    fs::write(dir.path().join("sellers.json"), "[]").unwrap();

    let err = load_dataset(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid input data: data.sellers must be a non-empty array");
}

#[test]
fn test_malformed_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = dir.path().join("broken.json");
    fs::write(&bundle, "{ not json").unwrap();

    let err = load_dataset(&bundle).unwrap_err();
    assert!(matches!(err, DatasetError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_nonexistent_path_is_io_error() {
    let err = load_dataset(Path::new("/no/such/sales.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}
