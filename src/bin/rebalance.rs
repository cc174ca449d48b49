//! Rebalance the sample AAPL/META portfolio and print the trades.
//!
//! Usage:
//!   cargo run --bin rebalance
//!   RUST_LOG=debug cargo run --bin rebalance   (per-asset decisions)

use std::process;

use rebalancer::{Portfolio, Rebalancer, StaticPrices};

fn sample_portfolio() -> Portfolio {
    Portfolio::default()
        .with_holding("AAPL", 20.0)
        .with_holding("META", 6.0)
        .with_target("AAPL", 0.6)
        .with_target("META", 0.4)
}

fn run() -> anyhow::Result<()> {
    let rebalancer = Rebalancer::new(StaticPrices::reference());
    let portfolio = sample_portfolio();

    let total = portfolio.total_value(rebalancer.oracle())?;
    log::info!(
        "rebalancing {} positions worth {total:.2}",
        portfolio.holdings().len()
    );

    let transaction = rebalancer.rebalance(&portfolio)?;
    println!("{transaction}");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
