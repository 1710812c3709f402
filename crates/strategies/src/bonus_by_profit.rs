use crate::BonusStrategy;
use crate::error::StrategyError;
use configuration::BonusSchedule;
use core_types::SellerStats;
use rust_decimal::Decimal;

/// Tiered bonus with the stock schedule: 15% of profit for rank 0, 10% for
/// ranks 1 and 2, nothing for the last place and 5% for everyone else.
///
/// The tiers are checked top-down, so a lone seller (rank 0 and last at once)
/// receives 15%, and with two or three sellers the last place still gets 10%.
pub fn calculate_bonus_by_profit(
    index: usize,
    total: usize,
    seller: &SellerStats,
) -> Option<Decimal> {
    tiered_bonus(&BonusSchedule::default(), index, total, seller.profit)
}

fn tiered_bonus(
    schedule: &BonusSchedule,
    index: usize,
    total: usize,
    profit: Decimal,
) -> Option<Decimal> {
    let pct = match index {
        0 => schedule.first_pct,
        1 | 2 => schedule.second_third_pct,
        _ if index + 1 == total => schedule.last_pct,
        _ => schedule.default_pct,
    };
    profit.checked_mul(pct)
}

/// Tiered bonus by profit rank with a configurable schedule.
#[derive(Debug, Clone, Default)]
pub struct BonusByProfit {
    schedule: BonusSchedule,
}

impl BonusByProfit {
    pub fn new(schedule: BonusSchedule) -> Result<Self, StrategyError> {
        for (name, pct) in schedule.tiers() {
            if pct < Decimal::ZERO || pct > Decimal::ONE {
                return Err(StrategyError::InvalidParameters(format!(
                    "{name} must be between 0 and 1, got {pct}"
                )));
            }
        }
        Ok(Self { schedule })
    }

    pub fn schedule(&self) -> &BonusSchedule {
        &self.schedule
    }
}

impl BonusStrategy for BonusByProfit {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Option<Decimal> {
        tiered_bonus(&self.schedule, index, total, seller.profit)
    }
}
