use crate::bonus_by_profit::BonusByProfit;
use crate::error::StrategyError;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::Config;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the revenue strategy selected by `id`.
pub fn create_revenue_strategy(
    id: RevenueStrategyId,
    _config: &Config,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    // The compiler will error if a new RevenueStrategyId is added but not handled here.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue)),
    }
}

/// Creates the bonus strategy selected by `id`, parameterised from `config`.
pub fn create_bonus_strategy(
    id: BonusStrategyId,
    config: &Config,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    match id {
        BonusStrategyId::ByProfit => {
            let schedule = config.strategies.bonus_schedule.clone();
            Ok(Box::new(BonusByProfit::new(schedule)?))
        }
    }
}
