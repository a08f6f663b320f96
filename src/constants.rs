//! Constants for the charge schedule.
//!
//! Contains the fee schedule rates, the segment label strings used by the
//! host layer, and presentation sentinels. The rates are used internally by
//! [`compute_charges`](crate::charges::compute_charges) but are also exported
//! so callers can inspect the schedule directly.
//!
//! All rates are expressed as fractions of trade value (quantity × price),
//! not percentages.

// ---------------------------------------------------------------------------
// Segment labels
// ---------------------------------------------------------------------------

/// Host-layer label denoting the delivery (rolling settlement) segment.
///
/// Matched case-insensitively by [`Segment::from_label`](crate::types::Segment::from_label).
pub const SEGMENT_LABEL_DELIVERY: &str = "ROLLING T1";

/// Host-layer label denoting the Futures & Options segment.
///
/// Matched case-insensitively by [`Segment::from_label`](crate::types::Segment::from_label).
pub const SEGMENT_LABEL_FNO: &str = "F&O";

// ---------------------------------------------------------------------------
// Presentation sentinels
// ---------------------------------------------------------------------------

/// Sentinel reported when the break-even price is not a finite number.
pub const NOT_APPLICABLE: &str = "not applicable";

// ---------------------------------------------------------------------------
// Fee schedule
// ---------------------------------------------------------------------------

/// The fixed regulatory and brokerage fee schedule.
pub mod rates {
    /// Brokerage rates, charged on trade value; GST is levied on top.
    pub mod brokerage {
        /// Brokerage rate for delivery trades.
        pub const DELIVERY: f64 = 0.000704847026178763;
        /// Brokerage rate for intraday and F&O trades.
        pub const INTRADAY: f64 = 0.00007;
        /// GST levied on the brokerage amount.
        pub const GST: f64 = 0.18;
    }

    /// Securities Transaction Tax rates, charged on trade value.
    pub mod stt {
        /// STT on F&O sell trades.
        pub const FNO_SELL: f64 = 0.0002;
        /// STT on delivery trades, both sides.
        pub const DELIVERY: f64 = 0.001;
        /// STT on intraday (non-delivery cash) sell trades.
        pub const INTRADAY_SELL: f64 = 0.00025;
    }

    /// Regulatory turnover and exchange transaction fees.
    pub mod regulatory {
        /// SEBI turnover fee, charged on every trade.
        pub const SEBI_TURNOVER: f64 = 0.000001;
        /// Exchange transaction fee for delivery and intraday cash trades.
        pub const EXCHANGE_TXN_CASH: f64 = 0.0000307;
        /// Exchange transaction fee for F&O trades.
        pub const EXCHANGE_TXN_FNO: f64 = 0.0000183;
    }

    /// Stamp duty rates, charged on the buy side only.
    pub mod stamp_duty {
        /// Stamp duty on delivery buys.
        pub const DELIVERY_BUY: f64 = 0.00015;
        /// Stamp duty on intraday (non-delivery cash) buys.
        pub const INTRADAY_BUY: f64 = 0.00003;
        /// Stamp duty on F&O buys.
        pub const FNO_BUY: f64 = 0.00002;
    }
}
