//! Console front-end for the advice store.
//!
//! Renders each state snapshot and forwards the refresh gesture (Enter)
//! back into the store: one request on startup, one per gesture. All
//! state logic lives in the library; this binary only draws.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use adviceslip::{AdviceStore, FetchState, HttpAdviceGateway};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Log to stderr so output interleaves cleanly with rendered advice.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(state: &FetchState) {
    match state {
        FetchState::Idle => {}
        FetchState::Loading { previous: None } => println!("Loading..."),
        FetchState::Loading {
            previous: Some(record),
        } => {
            println!("Advice #{} (refreshing)\n\"{}\"", record.id, record.text);
        }
        FetchState::Loaded { current } => {
            println!("Advice #{}\n\"{}\"", current.id, current.text);
        }
        FetchState::Failed { previous } => {
            println!("Something went wrong! Try checking your internet connection.");
            if let Some(record) = previous {
                println!("Advice #{} (stale)\n\"{}\"", record.id, record.text);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let store = AdviceStore::new(Arc::new(HttpAdviceGateway::new()));
    let _subscription = store.subscribe(render);

    store.request_advice();
    eprintln!("Press Enter for new advice, Ctrl-D to quit.");

    let mut lines = BufReader::new(stdin()).lines();
    while lines.next_line().await?.is_some() {
        store.request_advice();
    }

    Ok(())
}
