use crate::error::DatasetError;
use core_types::SalesData;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The collections of a sales dataset, in the order they are checked.
pub const COLLECTIONS: [&str; 4] = ["sellers", "products", "purchase_records", "customers"];

/// Collections that must contain at least one entry.
const NON_EMPTY: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Loads and validates a dataset from a bundle file or a directory of collection files.
pub fn load_dataset(path: &Path) -> Result<SalesData, DatasetError> {
    let raw = if path.is_dir() {
        read_directory(path)?
    } else {
        read_json(path)?
    };

    let data = parse_dataset(raw)?;
    tracing::info!(
        path = %path.display(),
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        customers = data.customers.len(),
        "Sales data loaded."
    );
    Ok(data)
}

/// Validates the shape of an untyped `data` value and decodes it.
pub fn parse_dataset(raw: Value) -> Result<SalesData, DatasetError> {
    validate_shape(&raw)?;
    Ok(serde_json::from_value(raw)?)
}

/// Checks that `data` is an object whose collections are arrays.
///
/// `sellers`, `products` and `purchase_records` must also be non-empty;
/// `customers` only has to be an array.
pub fn validate_shape(data: &Value) -> Result<(), DatasetError> {
    let object = data
        .as_object()
        .ok_or_else(|| DatasetError::InvalidInput("data must be an object".to_string()))?;

    for key in COLLECTIONS {
        let Some(items) = object.get(key).and_then(Value::as_array) else {
            return Err(DatasetError::InvalidInput(format!(
                "data.{key} must be an array"
            )));
        };
        if items.is_empty() && NON_EMPTY.contains(&key) {
            return Err(DatasetError::InvalidInput(format!(
                "data.{key} must be a non-empty array"
            )));
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> Result<Value, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_directory(dir: &Path) -> Result<Value, DatasetError> {
    let mut data = Map::new();
    for key in COLLECTIONS {
        let file = dir.join(format!("{key}.json"));
        if !file.is_file() {
            return Err(DatasetError::MissingFile(file));
        }
        tracing::debug!(file = %file.display(), "Reading collection.");
        data.insert(key.to_string(), read_json(&file)?);
    }
    Ok(Value::Object(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "customers": [],
            "products": [{"sku": "SKU_001", "purchase_price": 50}],
            "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Ivanov"}],
            "purchase_records": [{
                "seller_id": "seller_1",
                "total_amount": 180,
                "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100, "discount": 10}]
            }]
        })
    }

    fn shape_error(data: &Value) -> String {
        match validate_shape(data) {
            Err(DatasetError::InvalidInput(message)) => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_dataset_is_accepted() {
        let data = parse_dataset(minimal()).unwrap();
        assert_eq!(data.sellers[0].full_name(), "Ivan Ivanov");
        assert_eq!(data.purchase_records[0].items[0].quantity, 2);
    }

    #[test]
    fn test_rejects_non_object() {
        assert_eq!(shape_error(&json!([1, 2])), "data must be an object");
        assert_eq!(shape_error(&Value::Null), "data must be an object");
    }

    #[test]
    fn test_rejects_empty_required_collections() {
        for key in NON_EMPTY {
            let mut data = minimal();
            data[key] = json!([]);
            assert_eq!(shape_error(&data), format!("data.{key} must be a non-empty array"));
        }
    }

    #[test]
    fn test_rejects_non_array_collections() {
        for key in COLLECTIONS {
            let mut data = minimal();
            data[key] = json!({"not": "an array"});
            assert_eq!(shape_error(&data), format!("data.{key} must be an array"));
        }
    }

    #[test]
    fn test_missing_customers_is_rejected() {
        let mut data = minimal();
        data.as_object_mut().unwrap().remove("customers");
        assert_eq!(shape_error(&data), "data.customers must be an array");
    }

    #[test]
    fn test_empty_customers_is_fine() {
        assert!(validate_shape(&minimal()).is_ok());
    }

    #[test]
    fn test_wrong_field_types_fail_schema_decoding() {
        let mut data = minimal();
        data["purchase_records"][0]["items"][0]["quantity"] = json!("two");
        assert!(matches!(
            parse_dataset(data),
            Err(DatasetError::Schema(_))
        ));
    }
}
