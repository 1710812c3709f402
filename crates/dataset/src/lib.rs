//! # Sales Dataset Loader
//!
//! Reads the `data` snapshot an analysis runs on from JSON.
//!
//! Two layouts are accepted:
//!
//! - a single file holding the whole object with `customers`, `products`,
//!   `sellers` and `purchase_records` arrays;
//! - a directory with one file per collection (`customers.json`, ...).
//!
//! Before decoding, the raw JSON is checked against the expected shape so that
//! a malformed file fails with a message naming the offending key rather than
//! a generic serde error.

pub mod error;
pub mod loader;

pub use error::DatasetError;
pub use loader::{COLLECTIONS, load_dataset, parse_dataset, validate_shape};
