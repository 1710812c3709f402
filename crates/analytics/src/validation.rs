use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use core_types::SalesData;

/// Rejects data or options the aggregation cannot run on. Succeeds silently.
///
/// Data is checked before options: the required collections must be
/// non-empty, then both strategies must be present and the top-products
/// limit positive.
pub fn validate_inputs(data: &SalesData, options: &AnalysisOptions) -> Result<(), AnalyticsError> {
    let required = [
        ("sellers", data.sellers.is_empty()),
        ("products", data.products.is_empty()),
        ("purchase_records", data.purchase_records.is_empty()),
    ];
    if let Some((key, _)) = required.iter().find(|(_, empty)| *empty) {
        return Err(AnalyticsError::InvalidInput(format!(
            "data.{key} must be a non-empty array"
        )));
    }

    if options.calculate_revenue.is_none() {
        return Err(AnalyticsError::MissingStrategy("calculate_revenue"));
    }
    if options.calculate_bonus.is_none() {
        return Err(AnalyticsError::MissingStrategy("calculate_bonus"));
    }
    if options.top_products_limit == 0 {
        return Err(AnalyticsError::InvalidInput(
            "options.top_products_limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
