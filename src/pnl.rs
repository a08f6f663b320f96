//! Round-trip P&L aggregation.
//!
//! [`compute_pnl`] combines a matched buy leg and sell leg into gross P&L,
//! total charges, net P&L, and the break-even (loaded) price. All
//! intermediates stay unrounded; rounding happens only in the presentation
//! helpers on the result types.

use crate::charges::compute_charges;
use crate::error::{ChargeError, Result};
use crate::types::charges::TradeLeg;
use crate::types::enums::TransactionType;
use crate::types::pnl::{PnlResult, TradePnl};

/// Compute the P&L of a matched buy/sell round trip.
///
/// The buy leg is charged as a BUY and the sell leg as a SELL, whatever the
/// host layer supplied. Both legs must carry the same quantity
/// (single-instrument round-trip assumption).
///
/// # Errors
///
/// Returns [`ChargeError::QuantityMismatch`] when the leg quantities differ,
/// and propagates any per-leg validation error from
/// [`compute_charges`](crate::charges::compute_charges). No partial result
/// is ever produced.
pub fn compute_pnl(buy_leg: &TradeLeg, sell_leg: &TradeLeg) -> Result<TradePnl> {
    if buy_leg.quantity != sell_leg.quantity {
        return Err(ChargeError::QuantityMismatch {
            buy_qty: buy_leg.quantity,
            sell_qty: sell_leg.quantity,
        });
    }

    let buy = compute_charges(buy_leg, TransactionType::BUY)?;
    let sell = compute_charges(sell_leg, TransactionType::SELL)?;

    let gross_profit = sell.trade_value - buy.trade_value;
    let total_charges = buy.total_charges + sell.total_charges;
    let net_profit_loss = gross_profit - total_charges;

    // Quantity is validated positive above, but a non-finite quotient still
    // degrades to the "not applicable" sentinel at display time.
    let break_even_price = (buy.trade_value + total_charges) / buy_leg.quantity;

    let result = PnlResult {
        gross_profit,
        total_charges,
        net_profit_loss,
        break_even_price,
    };

    tracing::debug!(
        gross_profit,
        total_charges,
        net_profit_loss,
        break_even_price,
        outcome = ?result.outcome(),
        "aggregated round-trip P&L"
    );

    Ok(TradePnl { buy, sell, result })
}
