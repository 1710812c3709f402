//! # Seller Performance Analytics
//!
//! This crate turns a snapshot of sales data into the seller performance
//! report: revenue, profit, receipt count, best-selling products and a
//! rank-based bonus for every seller.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files or
//!   the command line. It depends on `core-types` and the `strategies` traits.
//! - **Stateless Calculation:** The `AnalyticsEngine` keeps no state between calls.
//!   Indexes and per-seller accumulators live only for the duration of one analysis.
//! - **Injected Policies:** Revenue per line and bonus per rank are supplied by the
//!   caller through `AnalysisOptions`.
//!
//! ## Public API
//!
//! - `analyze_sales_data`: validate, aggregate, rank and report in one call.
//! - `AnalyticsEngine`: the same steps, individually callable.
//! - `AnalysisOptions`: the strategies and report settings for one run.
//! - `SellerReport`: one row of the output.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;
pub mod validation;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, analyze_sales_data};
pub use error::AnalyticsError;
pub use options::{AnalysisOptions, DEFAULT_TOP_PRODUCTS_LIMIT};
pub use report::{SellerReport, round_money};
pub use validation::validate_inputs;
