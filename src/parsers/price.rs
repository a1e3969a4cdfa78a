use crate::error::{MonitorError, Result};
use crate::models::{PriceRecord, TOP_PRICE_COUNT};

/// Currency symbol removed before numeric parsing.
pub const CURRENCY_SYMBOL: char = '฿';

/// Thousands separator removed before numeric parsing.
pub const THOUSANDS_SEPARATOR: char = ',';

/// Parse a displayed price such as `฿1,234.50` into a sortable number.
///
/// Only the baht sign and `,` are stripped; anything else left over makes the
/// price invalid. The value is used for ordering only and never displayed.
pub fn parse_price_for_sort(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != CURRENCY_SYMBOL && c != THOUSANDS_SEPARATOR)
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MonitorError::InvalidPrice {
            raw: raw.to_string(),
        }),
    }
}

/// Sort prices ascending and keep the cheapest [`TOP_PRICE_COUNT`].
///
/// Ties keep extraction order. A single unparsable price fails the whole list.
pub fn rank_top_prices(records: Vec<PriceRecord>) -> Result<Vec<PriceRecord>> {
    let mut keyed = records
        .into_iter()
        .map(|record| parse_price_for_sort(&record.price).map(|value| (value, record)))
        .collect::<Result<Vec<_>>>()?;

    // sort_by is stable
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(keyed
        .into_iter()
        .take(TOP_PRICE_COUNT)
        .map(|(_, record)| record)
        .collect())
}
