use serde::{Deserialize, Serialize};

/// Identifies which line-item revenue calculation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevenueStrategyId {
    /// `sale_price * quantity * (1 - discount / 100)`.
    #[default]
    Simple,
}

/// Identifies which rank-based bonus schedule to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BonusStrategyId {
    /// Tiered percentage of profit by rank.
    #[default]
    ByProfit,
}
