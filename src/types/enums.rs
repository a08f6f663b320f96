//! Shared enum types for segments, transaction sides, and P&L outcomes.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` to match the labels exchanged
//! with the host layer, so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

use crate::constants::{SEGMENT_LABEL_DELIVERY, SEGMENT_LABEL_FNO};

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// Settlement segment of a trade, which selects the fee schedule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Delivery (rolling settlement) — shares taken into holding.
    DELIVERY,
    /// Same-day cash trades; also the fallback for unrecognized labels.
    INTRADAY,
    /// Futures & Options.
    FNO,
}

impl Segment {
    /// Classify a host-layer segment label.
    ///
    /// `"ROLLING T1"` (case-insensitive) is delivery and `"F&O"`
    /// (case-insensitive) is F&O; any other label is treated as
    /// non-delivery cash, i.e. [`Segment::INTRADAY`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(SEGMENT_LABEL_DELIVERY) {
            Self::DELIVERY
        } else if label.eq_ignore_ascii_case(SEGMENT_LABEL_FNO) {
            Self::FNO
        } else {
            Self::INTRADAY
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction Type
// ---------------------------------------------------------------------------

/// Buy or sell side of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    BUY,
    SELL,
}

// ---------------------------------------------------------------------------
// P&L Outcome
// ---------------------------------------------------------------------------

/// Sign classification of a net profit/loss figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PnlOutcome {
    /// Net P&L is strictly positive.
    PROFIT,
    /// Net P&L is strictly negative.
    LOSS,
    /// Net P&L is exactly zero.
    BREAK_EVEN,
}
