//! Console blackjack.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    bjterm::console::run(io::stdin().lock(), io::stdout().lock(), seed)?;
    Ok(())
}
