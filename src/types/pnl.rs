//! Round-trip P&L result types.

use serde::{Deserialize, Serialize};

use crate::constants::NOT_APPLICABLE;
use crate::types::charges::ChargeBreakdown;
use crate::types::enums::PnlOutcome;

// ---------------------------------------------------------------------------
// P&L Result
// ---------------------------------------------------------------------------

/// Profit/loss summary of a matched buy/sell round trip.
///
/// All fields are exact (unrounded); presentation helpers handle rounding
/// and the non-finite break-even degradation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlResult {
    /// Sell trade value minus buy trade value, before charges.
    pub gross_profit: f64,
    /// Sum of the total charges on both legs.
    pub total_charges: f64,
    /// Gross profit minus total charges.
    pub net_profit_loss: f64,
    /// The sell price at which net P&L would be zero (loaded price).
    pub break_even_price: f64,
}

impl PnlResult {
    /// Sign classification of the net profit/loss.
    pub fn outcome(&self) -> PnlOutcome {
        if self.net_profit_loss > 0.0 {
            PnlOutcome::PROFIT
        } else if self.net_profit_loss < 0.0 {
            PnlOutcome::LOSS
        } else {
            PnlOutcome::BREAK_EVEN
        }
    }

    /// Break-even price formatted with 4 decimal digits, no grouping.
    ///
    /// A non-finite break-even price is reported as the
    /// [`NOT_APPLICABLE`] sentinel rather than a numeric value.
    pub fn break_even_display(&self) -> String {
        if self.break_even_price.is_finite() {
            format!("{:.4}", self.break_even_price)
        } else {
            NOT_APPLICABLE.to_owned()
        }
    }
}

// ---------------------------------------------------------------------------
// Trade P&L (full aggregator output)
// ---------------------------------------------------------------------------

/// Full output of the P&L aggregator: one breakdown per leg plus the summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePnl {
    /// Charges on the buy leg.
    pub buy: ChargeBreakdown,
    /// Charges on the sell leg.
    pub sell: ChargeBreakdown,
    /// Aggregated profit/loss summary.
    pub result: PnlResult,
}
