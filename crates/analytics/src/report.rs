use core_types::TopProduct;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One row of the seller performance report.
///
/// Money fields are rounded to two decimal places and serialized as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

/// Rounds to cents, halves away from zero (`2.345 -> 2.35`, `-2.345 -> -2.35`).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
