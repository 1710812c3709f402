use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Units of one product sold by one seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Running totals for one seller while purchase records are folded in.
///
/// `products_sold` remembers the order in which each sku was first seen so
/// that ties in the top-products ranking come out in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    products_sold: Vec<TopProduct>,
    sku_positions: HashMap<String, usize>,
}

impl SellerStats {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
        }
    }

    /// Counts one receipt and adds its charged amount to revenue.
    ///
    /// Nothing is changed when the new revenue would overflow.
    pub fn record_sale(&mut self, total_amount: Decimal) -> Result<(), CoreError> {
        self.revenue = self
            .revenue
            .checked_add(total_amount)
            .ok_or(CoreError::Overflow { field: "revenue" })?;
        self.sales_count += 1;
        Ok(())
    }

    /// Adds one receipt line: its profit and the units sold under `sku`.
    ///
    /// Nothing is changed when the new profit would overflow.
    pub fn record_item(
        &mut self,
        sku: &str,
        quantity: u32,
        profit: Decimal,
    ) -> Result<(), CoreError> {
        self.profit = self
            .profit
            .checked_add(profit)
            .ok_or(CoreError::Overflow { field: "profit" })?;

        match self.sku_positions.get(sku) {
            Some(&pos) => self.products_sold[pos].quantity += u64::from(quantity),
            None => {
                self.sku_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(TopProduct {
                    sku: sku.to_string(),
                    quantity: u64::from(quantity),
                });
            }
        }
        Ok(())
    }

    /// Units sold per sku, in first-encounter order.
    pub fn products_sold(&self) -> &[TopProduct] {
        &self.products_sold
    }

    pub fn quantity_sold(&self, sku: &str) -> u64 {
        self.sku_positions
            .get(sku)
            .map_or(0, |&pos| self.products_sold[pos].quantity)
    }

    /// The `limit` best-selling products, highest quantity first. Ties keep encounter order.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked = self.products_sold.clone();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}
