use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid reporting period: start {from} is after end {to}")]
    InvalidPeriod { from: NaiveDate, to: NaiveDate },

    #[error("Seller {field} does not fit in a decimal")]
    Overflow { field: &'static str },
}
