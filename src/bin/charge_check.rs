//! Binary to compute charges and P&L for a round trip from the command line,
//! for inspecting the fee schedule output.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin charge_check --features cli -- <qty> <buy-price> <sell-price> [segment]
//! cargo run --bin charge_check --features cli -- 100 1000 1010 "ROLLING T1"
//! ```
//!
//! The segment label defaults to `INTRADAY`; `"ROLLING T1"` selects delivery
//! and `"F&O"` selects Futures & Options (both case-insensitive).

use std::env;
use std::process;

use charges_rs::pnl::compute_pnl;
use charges_rs::types::{Segment, TradeLeg};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: charge_check <qty> <buy-price> <sell-price> [segment]");
        process::exit(2);
    }

    let qty: f64 = parse_number(&args[0], "qty");
    let buy_price: f64 = parse_number(&args[1], "buy-price");
    let sell_price: f64 = parse_number(&args[2], "sell-price");
    let segment = Segment::from_label(args.get(3).map_or("INTRADAY", String::as_str));

    let buy = TradeLeg::new(qty, buy_price, segment);
    let sell = TradeLeg::new(qty, sell_price, segment);

    let trade = match compute_pnl(&buy, &sell) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&trade) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing result: {e}"),
    }

    println!();
    println!("Buy leg charges (rounded):  {:?}", trade.buy.rounded());
    println!("Sell leg charges (rounded): {:?}", trade.sell.rounded());
    println!("Gross P&L:   {:.2}", trade.result.gross_profit);
    println!("Charges:     {:.2}", trade.result.total_charges);
    println!(
        "Net P&L:     {:.2} ({:?})",
        trade.result.net_profit_loss,
        trade.result.outcome()
    );
    println!("Break-even:  {}", trade.result.break_even_display());
}

fn parse_number(raw: &str, name: &str) -> f64 {
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: {name} must be a number, got {raw:?}");
            process::exit(2);
        }
    }
}
