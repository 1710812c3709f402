use core_types::{BonusStrategyId, RevenueStrategyId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional; an empty file reproduces the stock bonus schedule
/// and a top-10 product list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSettings,
    pub strategies: Strategies,
}

/// Shape of the produced report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// How many best-selling products to list per seller.
    pub top_products_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
        }
    }
}

/// Selects the revenue and bonus calculations and holds their parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Strategies {
    pub revenue: RevenueStrategyId,
    pub bonus: BonusStrategyId,
    pub bonus_schedule: BonusSchedule,
}

/// Bonus as a fraction of profit for each rank tier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusSchedule {
    /// Rank 0, the most profitable seller.
    pub first_pct: Decimal,
    /// Ranks 1 and 2.
    pub second_third_pct: Decimal,
    /// Everyone else except the last place.
    pub default_pct: Decimal,
    /// The least profitable seller.
    pub last_pct: Decimal,
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self {
            first_pct: dec!(0.15),
            second_third_pct: dec!(0.10),
            default_pct: dec!(0.05),
            last_pct: Decimal::ZERO,
        }
    }
}

impl BonusSchedule {
    /// Returns each tier with its name, in evaluation order.
    pub fn tiers(&self) -> [(&'static str, Decimal); 4] {
        [
            ("first_pct", self.first_pct),
            ("second_third_pct", self.second_third_pct),
            ("default_pct", self.default_pct),
            ("last_pct", self.last_pct),
        ]
    }
}
