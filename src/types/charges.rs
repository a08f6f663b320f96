//! Trade leg input and charge breakdown types.

use serde::{Deserialize, Serialize};

use crate::types::enums::Segment;

// ---------------------------------------------------------------------------
// Trade Leg
// ---------------------------------------------------------------------------

/// One side of a round trip as supplied by the host layer.
///
/// The transaction side is not part of the leg: the caller passes it to
/// [`compute_charges`](crate::charges::compute_charges), and
/// [`compute_pnl`](crate::pnl::compute_pnl) fixes it per side (buy leg is
/// always BUY, sell leg always SELL).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeLeg {
    /// Number of shares or contracts. Must be finite and positive.
    pub quantity: f64,
    /// Price per share. Must be finite and positive.
    pub price: f64,
    /// Settlement segment.
    pub segment: Segment,
}

impl TradeLeg {
    /// Construct a leg from raw values.
    pub fn new(quantity: f64, price: f64, segment: Segment) -> Self {
        Self {
            quantity,
            price,
            segment,
        }
    }

    /// Exact trade value (quantity × price).
    pub fn trade_value(&self) -> f64 {
        self.quantity * self.price
    }
}

// ---------------------------------------------------------------------------
// Charge Breakdown
// ---------------------------------------------------------------------------

/// All charges levied on a single trade leg, as exact (unrounded) values.
///
/// Exact values are retained so that downstream aggregation does not compound
/// rounding error; [`rounded`](ChargeBreakdown::rounded) produces the
/// nearest-integer presentation form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    /// Trade value (quantity × price).
    pub trade_value: f64,
    /// Total brokerage: base fee plus GST.
    pub brokerage: f64,
    /// Securities Transaction Tax.
    pub stt: f64,
    /// SEBI turnover fee plus exchange transaction fee.
    pub sebi_exchange_charges: f64,
    /// Stamp duty (buy side only).
    pub stamp_duty: f64,
    /// Sum of STT, SEBI/exchange charges, stamp duty, and brokerage.
    pub total_charges: f64,
}

impl ChargeBreakdown {
    /// Nearest-integer presentation form of every field.
    ///
    /// All charges are non-negative, so `f64::round` (ties away from zero)
    /// coincides with round-half-up here.
    pub fn rounded(&self) -> RoundedBreakdown {
        RoundedBreakdown {
            trade_value: self.trade_value.round() as i64,
            brokerage: self.brokerage.round() as i64,
            stt: self.stt.round() as i64,
            sebi_exchange_charges: self.sebi_exchange_charges.round() as i64,
            stamp_duty: self.stamp_duty.round() as i64,
            total_charges: self.total_charges.round() as i64,
        }
    }
}

/// Nearest-integer presentation form of a [`ChargeBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedBreakdown {
    pub trade_value: i64,
    pub brokerage: i64,
    pub stt: i64,
    pub sebi_exchange_charges: i64,
    pub stamp_duty: i64,
    pub total_charges: i64,
}
