//! # Sales Report Strategy Library
//!
//! The two pluggable policies of a seller report: how much revenue a receipt
//! line brings in, and how large a seller's bonus is given their profit rank.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure functions over `core-types`. No I/O.
//! - **Strategy Agnostic Engine:** The analytics engine only sees the
//!   `RevenueStrategy` and `BonusStrategy` traits. Any closure with the right
//!   signature implements them, so callers can inject ad-hoc policies.
//! - **No Panicking Arithmetic:** Strategies compute with `checked_*` and report
//!   overflow as `None`; the engine turns that into an error.
//!
//! ## Public API
//!
//! - `RevenueStrategy`, `BonusStrategy`: the injection points.
//! - `calculate_simple_revenue`, `calculate_bonus_by_profit`: the stock policies.
//! - `SimpleRevenue`, `BonusByProfit`: the same policies as configurable structs.
//! - `create_revenue_strategy`, `create_bonus_strategy`: factories keyed by config.

pub mod bonus_by_profit;
pub mod error;
pub mod factory;
pub mod simple_revenue;

pub use bonus_by_profit::{BonusByProfit, calculate_bonus_by_profit};
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use simple_revenue::{SimpleRevenue, calculate_simple_revenue};

pub use core_types::{BonusStrategyId, RevenueStrategyId};

use core_types::{Item, Product, SellerStats};
use rust_decimal::Decimal;

/// Computes the revenue of a single receipt line.
///
/// Returns `None` when the result does not fit in a `Decimal`, following the
/// `checked_*` arithmetic it is built from.
///
/// The `Send + Sync` bounds allow one strategy instance to be shared by
/// analyses running on different threads.
pub trait RevenueStrategy: Send + Sync {
    fn calculate(&self, item: &Item, product: &Product) -> Option<Decimal>;
}

/// Computes a seller's bonus from their zero-based profit rank.
///
/// # Arguments
///
/// * `index` - Rank after sorting by profit, descending. 0 is the best seller.
/// * `total` - Number of ranked sellers.
/// * `seller` - The seller's final statistics.
///
/// Returns `None` on decimal overflow.
pub trait BonusStrategy: Send + Sync {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&Item, &Product) -> Option<Decimal> + Send + Sync,
{
    fn calculate(&self, item: &Item, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Option<Decimal> + Send + Sync,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal> {
        self(index, total, seller)
    }
}
