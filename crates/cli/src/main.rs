//! `orderflow [FILE]`: process a JSON array of orders.
//!
//! Orders are read from FILE (or stdin), processed against an in-memory store
//! and a tracing-backed notifier, and one outcome per order is printed to
//! stdout as JSON. Processor settings come from the environment.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use orderflow_core::OrderId;
use orderflow_infra::{InMemoryOrderStore, TracingNotifier};
use orderflow_orders::{Order, OrderProcessor, ProcessorConfig};

#[derive(Debug, Parser)]
#[command(name = "orderflow", version)]
#[command(about = "Validate, persist and confirm orders read as JSON", long_about = None)]
struct Args {
    /// Orders JSON file; stdin when omitted
    file: Option<PathBuf>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Outcome {
    id: OrderId,
    processed: bool,
    notified: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    orderflow_observability::init();

    let input = read_input(args.file.as_deref())?;

    let config = ProcessorConfig::from_env();
    tracing::info!(
        threshold = %config.notification_threshold,
        failure_policy = %config.notification_failure_policy,
        "processor configured"
    );

    let outcomes = run(&input, config)?;
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read orders from stdin")?;
            Ok(buf)
        }
    }
}

fn run(input: &str, config: ProcessorConfig) -> Result<Vec<Outcome>> {
    let mut orders: Vec<Order> = serde_json::from_str(input).context("invalid orders JSON")?;

    let store = Arc::new(InMemoryOrderStore::new());
    let notifier = Arc::new(TracingNotifier::new());
    let processor = OrderProcessor::new(store, notifier.clone()).with_config(config);

    let mut outcomes = Vec::with_capacity(orders.len());
    for order in &mut orders {
        let before = notifier.sent_count();
        let processed = processor
            .process_order(order)
            .with_context(|| format!("order {} failed", order.id))?;
        outcomes.push(Outcome {
            id: order.id,
            processed,
            notified: notifier.sent_count() > before,
        });
    }

    Ok(outcomes)
}
