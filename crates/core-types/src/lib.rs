pub mod enums;
pub mod error;
pub mod stats;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, RevenueStrategyId};
pub use error::CoreError;
pub use stats::{SellerStats, TopProduct};
pub use structs::{Customer, Item, Product, PurchaseRecord, SalesData, Seller};
