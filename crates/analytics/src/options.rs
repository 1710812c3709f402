use crate::error::AnalyticsError;
use configuration::Config;
use std::fmt;
use strategies::{BonusStrategy, RevenueStrategy, create_bonus_strategy, create_revenue_strategy};

/// Number of best-selling products listed per seller unless configured otherwise.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// The policies an analysis runs with.
///
/// Both strategies are optional at construction so that an incomplete set of
/// options is reported by the validator rather than being unrepresentable.
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
    pub top_products_limit: usize,
}

impl AnalysisOptions {
    pub fn new(
        calculate_revenue: impl RevenueStrategy + 'static,
        calculate_bonus: impl BonusStrategy + 'static,
    ) -> Self {
        Self {
            calculate_revenue: Some(Box::new(calculate_revenue)),
            calculate_bonus: Some(Box::new(calculate_bonus)),
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }

    /// Builds the strategies and report settings selected in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AnalyticsError> {
        let revenue = create_revenue_strategy(config.strategies.revenue, config)?;
        let bonus = create_bonus_strategy(config.strategies.bonus, config)?;

        Ok(Self {
            calculate_revenue: Some(revenue),
            calculate_bonus: Some(bonus),
            top_products_limit: config.report.top_products_limit,
        })
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }
}

impl Default for AnalysisOptions {
    /// No strategies; these options fail validation until both are set.
    fn default() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("top_products_limit", &self.top_products_limit)
            .finish()
    }
}
