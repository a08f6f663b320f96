//! Value types consumed and produced by the calculators.

pub mod charges;
pub mod enums;
pub mod pnl;

pub use charges::{ChargeBreakdown, RoundedBreakdown, TradeLeg};
pub use enums::{PnlOutcome, Segment, TransactionType};
pub use pnl::{PnlResult, TradePnl};
