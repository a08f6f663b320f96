//! # charges-rs
//!
//! Brokerage, statutory charge, and break-even price calculator for Indian
//! equity and F&O trades.
//!
//! Given a trade leg (quantity, price, segment) and a transaction side, the
//! crate produces a full [`ChargeBreakdown`](types::ChargeBreakdown) —
//! brokerage with GST, STT, SEBI/exchange charges, and stamp duty — and
//! aggregates a matched buy/sell pair into a [`PnlResult`](types::PnlResult)
//! with net profit/loss and the loaded (break-even) price.
//!
//! ## Quick Start
//!
//! ```
//! use charges_rs::pnl::compute_pnl;
//! use charges_rs::types::{Segment, TradeLeg};
//!
//! fn main() -> charges_rs::error::Result<()> {
//!     let buy = TradeLeg::new(50.0, 200.0, Segment::INTRADAY);
//!     let sell = TradeLeg::new(50.0, 210.0, Segment::INTRADAY);
//!     let trade = compute_pnl(&buy, &sell)?;
//!     println!("net P&L: {:.2}", trade.result.net_profit_loss);
//!     println!("break-even: {}", trade.result.break_even_display());
//!     Ok(())
//! }
//! ```

pub mod charges;
pub mod constants;
pub mod error;
pub mod pnl;
pub mod types;

/// Re-export the main entry points at crate root for convenience.
pub use charges::compute_charges;
pub use pnl::compute_pnl;
/// Re-export the error type and Result alias.
pub use error::{ChargeError, Result};
