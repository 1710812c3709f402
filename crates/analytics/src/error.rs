use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Strategy function `{0}` is not provided")]
    MissingStrategy(&'static str),

    #[error("Seller id '{0}' appears more than once in data.sellers")]
    DuplicateSeller(String),

    #[error("Product sku '{0}' appears more than once in data.products")]
    DuplicateProduct(String),

    #[error("Purchase record #{record} references unknown seller '{seller_id}'")]
    UnknownSeller { seller_id: String, record: usize },

    #[error("Purchase record #{record} of seller '{seller_id}' references unknown product '{sku}'")]
    UnknownProduct {
        sku: String,
        seller_id: String,
        record: usize,
    },

    #[error("Purchase record #{record} overflows the totals of seller '{seller_id}'")]
    Overflow { seller_id: String, record: usize },

    #[error("Bonus of seller '{seller_id}' at rank {rank} overflows")]
    BonusOverflow { seller_id: String, rank: usize },

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),
}
