use anyhow::{Context, Result};
use statestore::core::config::Config;
use statestore::core::tracing_init;
use statestore::fetch::SimulatedFetcher;
use statestore::store::root::Store;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 1 {
        let config_path = PathBuf::from(&args[1]);
        Config::from_file(&config_path).context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?
    } else {
        Config::default()
    };

    tracing_init::init_tracing(&config.logging);

    info!(
        version = %config.store.version,
        fetch_delay_ms = config.fetch.delay_ms,
        "State store starting"
    );

    let fetcher = Arc::new(SimulatedFetcher::from_config(&config.fetch));
    let store = Store::new(&config, fetcher);

    store.user.subscribe(|state| {
        info!(
            loading = state.loading,
            username = %state.current_user.username,
            "User state changed"
        );
    });

    info!(
        store_version = store.version(),
        loading = store.user.loading(),
        "Initial state"
    );

    store
        .user
        .load_current_user_data()
        .await
        .context("User fetch failed")?;

    let snapshot = serde_json::to_string(&store.user.state())
        .context("Failed to serialize user state")?;

    info!(
        user_name = %store.user.user_name(),
        full_name = %store.user.full_name(),
        snapshot = %snapshot,
        "User data loaded"
    );

    Ok(())
}
