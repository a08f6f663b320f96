//! Error types for the `charges-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, ChargeError>`.
//!
//! [`ChargeError`] covers:
//! - **Invalid quantity / price** — Non-positive or non-finite leg inputs
//! - **Non-finite values** — Trade value overflowing to infinity or NaN
//! - **Quantity mismatch** — Buy and sell legs of a round trip that disagree
//!
//! A break-even price that cannot be represented numerically is *not* an
//! error: it degrades to the "not applicable" sentinel at the presentation
//! layer (see [`PnlResult::break_even_display`](crate::types::PnlResult::break_even_display)).

/// All possible errors produced by the charge and P&L calculators.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ChargeError {
    /// The quantity was zero, negative, or not a finite number.
    #[error("invalid quantity: {0} (must be a finite positive number)")]
    InvalidQuantity(f64),

    /// The price was zero, negative, or not a finite number.
    #[error("invalid price: {0} (must be a finite positive number)")]
    InvalidPrice(f64),

    /// A computed trade value overflowed to a non-finite number.
    #[error("non-finite trade value: {0}")]
    NonFiniteValue(f64),

    /// The buy and sell legs of a round trip carried different quantities.
    #[error("quantity mismatch: buy leg {buy_qty}, sell leg {sell_qty}")]
    QuantityMismatch {
        /// Quantity on the buy leg.
        buy_qty: f64,
        /// Quantity on the sell leg.
        sell_qty: f64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChargeError>;
