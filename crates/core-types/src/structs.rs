use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A member of the sales staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Any further HR fields (`start_date`, `position`, ...). Not read by the analysis.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Seller {
    /// The display name used in reports: first and last name separated by one space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalogue entry. Only `sku` and `purchase_price` matter to the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// The price the shop paid per unit.
    pub purchase_price: Decimal,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: Decimal,
    /// Discount in percent, 0 to 100.
    #[serde(default)]
    pub discount: Decimal,
}

/// A receipt issued by one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// The amount actually charged. Seller revenue is the sum of these, not of the items.
    pub total_amount: Decimal,
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Receipt date, `YYYY-MM-DD` optionally followed by a time part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PurchaseRecord {
    /// Parses the calendar date out of `date`, ignoring any time component.
    pub fn sale_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// A customer record. Carried through untouched; the analysis never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// The complete input snapshot of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Returns a copy restricted to purchase records dated inside `[from, to]`.
    ///
    /// Either bound may be open. When at least one bound is given, records
    /// without a parseable date are dropped. Reference data is copied as is.
    pub fn within_period(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<SalesData, CoreError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(CoreError::InvalidPeriod { from, to });
            }
        }

        let purchase_records = if from.is_none() && to.is_none() {
            self.purchase_records.clone()
        } else {
            self.purchase_records
                .iter()
                .filter(|record| match record.sale_date() {
                    Some(day) => from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t),
                    None => false,
                })
                .cloned()
                .collect()
        };

        Ok(SalesData {
            customers: self.customers.clone(),
            products: self.products.clone(),
            sellers: self.sellers.clone(),
            purchase_records,
        })
    }
}
