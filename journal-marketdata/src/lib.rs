pub mod client;
pub mod pnl;

pub use client::{CandleRequest, MarketDataClient};
pub use pnl::calculate_live_pnl;

use serde_json::Value;

/// Provider payloads carry prices either as JSON numbers or as numeric
/// strings; both are accepted.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_f64_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_f64(&json!(1.25)), Some(1.25));
        assert_eq!(coerce_f64(&json!("1.25")), Some(1.25));
        assert_eq!(coerce_f64(&json!(" 1.25 ")), Some(1.25));
        assert_eq!(coerce_f64(&json!("abc")), None);
        assert_eq!(coerce_f64(&json!(null)), None);
        assert_eq!(coerce_f64(&json!([1.0])), None);
    }
}
