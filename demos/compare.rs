//! Generates a random instance and compares every solver on it.
//!
//! ```text
//! cargo run --release --example compare -- 40 1337
//! RUST_LOG=u_knapsack=debug cargo run --example compare
//! ```
//!
//! Arguments: item count (default 25) and seed (default random).

use tracing_subscriber::EnvFilter;
use u_knapsack::compare::{CompareConfig, CompareRunner};
use u_knapsack::generator::{GeneratorConfig, ItemGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let num_items = match args.next() {
        Some(arg) => arg.parse()?,
        None => 25,
    };

    let mut config = GeneratorConfig::default().with_num_items(num_items);
    if let Some(arg) = args.next() {
        config = config.with_seed(arg.parse()?);
    }

    let instance = ItemGenerator::generate(&config)?;
    let report = CompareRunner::run(
        &instance.items,
        instance.capacity,
        &CompareConfig::default(),
    )?;
    print!("{report}");

    if !report.values_agree() {
        return Err("solvers disagree on the optimal value".into());
    }
    Ok(())
}
