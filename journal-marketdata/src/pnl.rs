use crate::coerce_f64;
use serde_json::Value;
use tracing::warn;

/// Computes the live P&L of an open trade against the current price,
/// rounded to 2 decimal places.
///
/// Lenient by contract: this is a display helper, not ledger-grade
/// accounting. Malformed input (missing or non-numeric fields) yields
/// `0.0` plus a diagnostic log line instead of an error.
pub fn calculate_live_pnl(trade: &Value, current_price: f64) -> f64 {
    match try_live_pnl(trade, current_price) {
        Ok(pnl) => pnl,
        Err(reason) => {
            warn!("Could not calculate live PnL: {}", reason);
            0.0
        }
    }
}

fn try_live_pnl(trade: &Value, current_price: f64) -> std::result::Result<f64, String> {
    let entry_price = numeric_field(trade, "entry_price")?;
    let size = numeric_field(trade, "size")?;
    // An absent fees field defaults to zero; a present but non-numeric
    // value (including null) is malformed input.
    let fees = match trade.get("fees") {
        None => 0.0,
        Some(value) => coerce_f64(value).ok_or("non-numeric fees")?,
    };
    let direction = trade
        .get("direction")
        .and_then(Value::as_str)
        .ok_or("missing or non-string direction")?
        .to_lowercase();

    // Any direction other than "long" settles as short.
    let pnl = if direction == "long" {
        (current_price - entry_price) * size - fees
    } else {
        (entry_price - current_price) * size - fees
    };

    Ok((pnl * 100.0).round() / 100.0)
}

fn numeric_field(trade: &Value, field: &str) -> std::result::Result<f64, String> {
    trade
        .get(field)
        .and_then(coerce_f64)
        .ok_or_else(|| format!("missing or non-numeric {}", field))
}
