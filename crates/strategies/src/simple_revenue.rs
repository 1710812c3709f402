use crate::RevenueStrategy;
use core_types::{Item, Product};
use rust_decimal::Decimal;

/// Line revenue: `sale_price * quantity * (1 - discount / 100)`.
///
/// The product card is not consulted. `None` on overflow.
pub fn calculate_simple_revenue(item: &Item, _product: &Product) -> Option<Decimal> {
    let discount_fraction = item.discount.checked_div(Decimal::ONE_HUNDRED)?;
    let remaining = Decimal::ONE.checked_sub(discount_fraction)?;
    item.sale_price
        .checked_mul(Decimal::from(item.quantity))?
        .checked_mul(remaining)
}

/// `calculate_simple_revenue` as a strategy object.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn calculate(&self, item: &Item, product: &Product) -> Option<Decimal> {
        calculate_simple_revenue(item, product)
    }
}
