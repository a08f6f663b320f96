//! Per-leg charge calculation.
//!
//! [`compute_charges`] maps one trade leg and a transaction side to a
//! [`ChargeBreakdown`] using the fixed fee schedule in
//! [`constants::rates`](crate::constants::rates). The segment × side
//! branching is expressed as small rate-lookup functions so each charge
//! type selects exactly one branch.

use crate::constants::rates;
use crate::error::{ChargeError, Result};
use crate::types::charges::{ChargeBreakdown, TradeLeg};
use crate::types::enums::{Segment, TransactionType};

/// Compute all charges for a single trade leg.
///
/// Pure and deterministic: the same inputs always produce the same
/// breakdown, and nothing is cached between calls.
///
/// # Errors
///
/// Returns [`ChargeError::InvalidQuantity`] or [`ChargeError::InvalidPrice`]
/// when either input is non-positive or non-finite, and
/// [`ChargeError::NonFiniteValue`] when the trade value overflows.
pub fn compute_charges(leg: &TradeLeg, txn: TransactionType) -> Result<ChargeBreakdown> {
    if !leg.quantity.is_finite() || leg.quantity <= 0.0 {
        return Err(ChargeError::InvalidQuantity(leg.quantity));
    }
    if !leg.price.is_finite() || leg.price <= 0.0 {
        return Err(ChargeError::InvalidPrice(leg.price));
    }

    let trade_value = leg.trade_value();
    if !trade_value.is_finite() {
        return Err(ChargeError::NonFiniteValue(trade_value));
    }

    let brokerage_base = trade_value * brokerage_rate(leg.segment);
    let brokerage = brokerage_base + brokerage_base * rates::brokerage::GST;

    let stt = trade_value * stt_rate(leg.segment, txn);

    let sebi_exchange_charges = trade_value * rates::regulatory::SEBI_TURNOVER
        + trade_value * exchange_txn_rate(leg.segment);

    let stamp_duty = trade_value * stamp_duty_rate(leg.segment, txn);

    let total_charges = stt + sebi_exchange_charges + stamp_duty + brokerage;

    tracing::debug!(
        ?txn,
        segment = ?leg.segment,
        trade_value,
        brokerage,
        stt,
        sebi_exchange_charges,
        stamp_duty,
        total_charges,
        "computed charges"
    );

    Ok(ChargeBreakdown {
        trade_value,
        brokerage,
        stt,
        sebi_exchange_charges,
        stamp_duty,
        total_charges,
    })
}

/// Brokerage rate: delivery has its own rate; intraday and F&O share one.
fn brokerage_rate(segment: Segment) -> f64 {
    match segment {
        Segment::DELIVERY => rates::brokerage::DELIVERY,
        Segment::INTRADAY | Segment::FNO => rates::brokerage::INTRADAY,
    }
}

/// STT rate. The F&O sell branch is checked first, then delivery (both
/// sides), then the non-delivery sell fallback; buys outside delivery pay
/// nothing. The branches partition segment × side.
fn stt_rate(segment: Segment, txn: TransactionType) -> f64 {
    match (segment, txn) {
        (Segment::FNO, TransactionType::SELL) => rates::stt::FNO_SELL,
        (Segment::DELIVERY, _) => rates::stt::DELIVERY,
        (Segment::INTRADAY, TransactionType::SELL) => rates::stt::INTRADAY_SELL,
        _ => 0.0,
    }
}

/// Exchange transaction fee rate: F&O has its own rate; cash segments share one.
fn exchange_txn_rate(segment: Segment) -> f64 {
    match segment {
        Segment::FNO => rates::regulatory::EXCHANGE_TXN_FNO,
        Segment::DELIVERY | Segment::INTRADAY => rates::regulatory::EXCHANGE_TXN_CASH,
    }
}

/// Stamp duty rate: buy side only, rate by segment; any sell pays nothing.
fn stamp_duty_rate(segment: Segment, txn: TransactionType) -> f64 {
    match (segment, txn) {
        (Segment::FNO, TransactionType::BUY) => rates::stamp_duty::FNO_BUY,
        (Segment::DELIVERY, TransactionType::BUY) => rates::stamp_duty::DELIVERY_BUY,
        (Segment::INTRADAY, TransactionType::BUY) => rates::stamp_duty::INTRADAY_BUY,
        (_, TransactionType::SELL) => 0.0,
    }
}
