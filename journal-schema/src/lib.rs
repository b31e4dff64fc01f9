//! Payload schemas for the trading-journal web layer.
//!
//! Each record kind exposes a `validate_*` entry point taking an untyped
//! JSON payload and producing a typed record, or a validation failure
//! naming the offending field. Validation is structural only: required
//! fields must be present with the right shape, optional fields fill in
//! defaults. Cross-field, uniqueness and referential checks belong to the
//! persistence layer, not here.

pub mod account;
pub mod bias;
pub mod note;
pub mod strategy;
pub mod trade;

mod validate;

pub use account::{validate_account, Account};
pub use bias::{validate_weekly_bias, BiasArgument, BiasPoint, WeeklyBias};
pub use note::{validate_note, Note};
pub use strategy::{validate_strategy, Strategy};
pub use trade::{validate_trade, Trade};

use serde::{Deserialize, Serialize};

/// Labelled chart image embedded in trade and weekly-bias records. Pure
/// value, no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screenshot {
    pub label: String,
    pub screenshot_url: String,
}
