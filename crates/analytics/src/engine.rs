use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::{SellerReport, round_money};
use crate::validation::validate_inputs;
use core_types::{Product, SalesData, Seller, SellerStats};
use rust_decimal::Decimal;
use std::collections::HashMap;
use strategies::{BonusStrategy, RevenueStrategy};

/// A stateless calculator turning sales data into a ranked seller report.
///
/// Every call builds its own indexes and accumulators and drops them on
/// return, so one engine can serve any number of independent analyses.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for producing the seller report.
    ///
    /// # Arguments
    ///
    /// * `data` - Sellers, products and the purchase records to fold in.
    /// * `options` - The revenue and bonus strategies and the top-products limit.
    ///
    /// # Returns
    ///
    /// One `SellerReport` per seller, ordered by profit descending. Sellers
    /// with equal profit keep their order from `data.sellers`. The analysis
    /// is all-or-nothing: any error leaves no partial result.
    pub fn calculate(
        &self,
        data: &SalesData,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        validate_inputs(data, options)?;

        let revenue = options
            .calculate_revenue
            .as_deref()
            .ok_or(AnalyticsError::MissingStrategy("calculate_revenue"))?;
        let bonus = options
            .calculate_bonus
            .as_deref()
            .ok_or(AnalyticsError::MissingStrategy("calculate_bonus"))?;

        let mut stats = self.aggregate(data, revenue)?;
        self.rank(&mut stats);

        let report = self.build_report(&stats, bonus, options.top_products_limit)?;
        tracing::debug!(
            sellers = report.len(),
            purchase_records = data.purchase_records.len(),
            "Seller report calculated."
        );
        Ok(report)
    }

    /// Folds every purchase record, in input order, into per-seller accumulators.
    ///
    /// The returned accumulators are in `data.sellers` order. A record whose
    /// amounts do not fit in a `Decimal` fails the whole pass.
    pub fn aggregate(
        &self,
        data: &SalesData,
        revenue: &dyn RevenueStrategy,
    ) -> Result<Vec<SellerStats>, AnalyticsError> {
        let mut stats: Vec<SellerStats> = data
            .sellers
            .iter()
            .map(|seller| SellerStats::new(seller.id.clone(), seller.full_name()))
            .collect();

        let seller_index = index_sellers(&data.sellers)?;
        let product_index = index_products(&data.products)?;

        for (record_no, record) in data.purchase_records.iter().enumerate() {
            let &pos = seller_index.get(record.seller_id.as_str()).ok_or_else(|| {
                AnalyticsError::UnknownSeller {
                    seller_id: record.seller_id.clone(),
                    record: record_no,
                }
            })?;
            let seller = &mut stats[pos];
            let overflow = || AnalyticsError::Overflow {
                seller_id: record.seller_id.clone(),
                record: record_no,
            };

            seller
                .record_sale(record.total_amount)
                .map_err(|_| overflow())?;

            for item in &record.items {
                let product = product_index.get(item.sku.as_str()).ok_or_else(|| {
                    AnalyticsError::UnknownProduct {
                        sku: item.sku.clone(),
                        seller_id: record.seller_id.clone(),
                        record: record_no,
                    }
                })?;

                let line_profit = revenue
                    .calculate(item, product)
                    .zip(product.purchase_price.checked_mul(Decimal::from(item.quantity)))
                    .and_then(|(line_revenue, cost)| line_revenue.checked_sub(cost))
                    .ok_or_else(overflow)?;
                seller
                    .record_item(&item.sku, item.quantity, line_profit)
                    .map_err(|_| overflow())?;
            }
        }

        Ok(stats)
    }

    /// Sorts by profit, highest first. The sort is stable.
    pub fn rank(&self, stats: &mut [SellerStats]) {
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));
    }

    /// Assigns bonuses by position in the already ranked `stats` and rounds the money.
    fn build_report(
        &self,
        stats: &[SellerStats],
        bonus: &dyn BonusStrategy,
        top_products_limit: usize,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        let total = stats.len();

        stats
            .iter()
            .enumerate()
            .map(|(index, seller)| {
                let seller_bonus = bonus.calculate(index, total, seller).ok_or_else(|| {
                    AnalyticsError::BonusOverflow {
                        seller_id: seller.id.clone(),
                        rank: index,
                    }
                })?;

                Ok(SellerReport {
                    seller_id: seller.id.clone(),
                    name: seller.name.clone(),
                    revenue: round_money(seller.revenue),
                    profit: round_money(seller.profit),
                    sales_count: seller.sales_count,
                    top_products: seller.top_products(top_products_limit),
                    bonus: round_money(seller_bonus),
                })
            })
            .collect()
    }
}

/// Seller id -> position in `sellers`, which is also the accumulator position.
fn index_sellers(sellers: &[Seller]) -> Result<HashMap<&str, usize>, AnalyticsError> {
    let mut index = HashMap::with_capacity(sellers.len());
    for (pos, seller) in sellers.iter().enumerate() {
        if index.insert(seller.id.as_str(), pos).is_some() {
            return Err(AnalyticsError::DuplicateSeller(seller.id.clone()));
        }
    }
    Ok(index)
}

fn index_products(products: &[Product]) -> Result<HashMap<&str, &Product>, AnalyticsError> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        if index.insert(product.sku.as_str(), product).is_some() {
            return Err(AnalyticsError::DuplicateProduct(product.sku.clone()));
        }
    }
    Ok(index)
}

/// Runs a fresh `AnalyticsEngine` over `data`.
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, AnalyticsError> {
    AnalyticsEngine::new().calculate(data, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Item, PurchaseRecord};
    use rust_decimal_macros::dec;
    use serde_json::Map;
    use strategies::calculate_simple_revenue;

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: id.to_string(),
            details: Map::new(),
        }
    }

    fn product(sku: &str, purchase_price: Decimal) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
            attributes: Map::new(),
        }
    }

    fn record(seller_id: &str, total_amount: Decimal, items: Vec<Item>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            total_amount,
            items,
            receipt_id: None,
            customer_id: None,
            date: None,
            extra: Map::new(),
        }
    }

    fn item(sku: &str, quantity: u32, sale_price: Decimal) -> Item {
        Item {
            sku: sku.to_string(),
            quantity,
            sale_price,
            discount: Decimal::ZERO,
        }
    }

    #[test]
    fn test_aggregate_keeps_seller_order_and_totals() {
        let data = SalesData {
            customers: vec![],
            products: vec![product("A", dec!(1)), product("B", dec!(2))],
            sellers: vec![seller("s1"), seller("s2")],
            purchase_records: vec![
                record("s2", dec!(30), vec![item("A", 3, dec!(10))]),
                record("s1", dec!(5), vec![item("B", 1, dec!(5))]),
                record("s2", dec!(4), vec![item("B", 2, dec!(2)), item("A", 1, dec!(1))]),
            ],
        };

        let stats = AnalyticsEngine::new()
            .aggregate(&data, &calculate_simple_revenue)
            .unwrap();

        assert_eq!(stats[0].id, "s1");
        assert_eq!(stats[0].sales_count, 1);
        assert_eq!(stats[0].profit, dec!(3));

        assert_eq!(stats[1].id, "s2");
        assert_eq!(stats[1].sales_count, 2);
        assert_eq!(stats[1].revenue, dec!(34));
        // (30 - 3) + (4 - 4) + (1 - 1)
        assert_eq!(stats[1].profit, dec!(27));
        assert_eq!(stats[1].quantity_sold("A"), 4);
    }

    #[test]
    fn test_cost_overflow_fails_aggregation() {
        let data = SalesData {
            customers: vec![],
            products: vec![product("A", Decimal::MAX)],
            sellers: vec![seller("s1")],
            purchase_records: vec![
                record("s1", dec!(5), vec![item("A", 1, dec!(5))]),
                record("s1", dec!(5), vec![item("A", 2, dec!(5))]),
            ],
        };

        let err = AnalyticsEngine::new()
            .aggregate(&data, &calculate_simple_revenue)
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Overflow { ref seller_id, record: 1 } if seller_id == "s1"
        ));
    }

    #[test]
    fn test_rank_is_stable_for_equal_profit() {
        let mut stats: Vec<SellerStats> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| SellerStats::new(*id, *id))
            .collect();
        stats[0].profit = dec!(10);
        stats[1].profit = dec!(20);
        stats[2].profit = dec!(10);
        stats[3].profit = dec!(20);

        AnalyticsEngine::new().rank(&mut stats);

        let ids: Vec<_> = stats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_duplicate_seller_is_rejected() {
        let sellers = vec![seller("s1"), seller("s2"), seller("s1")];
        assert!(matches!(
            index_sellers(&sellers),
            Err(AnalyticsError::DuplicateSeller(id)) if id == "s1"
        ));
    }

    #[test]
    fn test_duplicate_product_is_rejected() {
        let products = vec![product("A", dec!(1)), product("A", dec!(2))];
        assert!(matches!(
            index_products(&products),
            Err(AnalyticsError::DuplicateProduct(sku)) if sku == "A"
        ));
    }
}
