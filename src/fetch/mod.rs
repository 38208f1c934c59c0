use crate::core::config::FetchConfig;
use crate::core::error::FetchError;
use crate::models::user::User;
use futures::future::BoxFuture;
use std::time::Duration;
use tracing::debug;

/// Port through which the user module obtains the current user.
///
/// Implementations own transport and latency; the store only ever sees the
/// resulting `User` or a `FetchError`. Keeping the port injectable lets tests
/// drive the load action without real-time waits.
pub trait UserFetcher: Send + Sync {
    fn fetch_current_user(&self) -> BoxFuture<'_, Result<User, FetchError>>;
}

/// Fetcher that stands in for a remote backend: waits a fixed delay, then
/// yields a canned user. It never fails.
pub struct SimulatedFetcher {
    delay: Duration,
}

impl SimulatedFetcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }

    fn canned_user() -> User {
        User {
            username: "doejohn".to_string(),
            first_name: Some("John".to_string()),
            middle_name: Some("J.".to_string()),
            last_name: Some("Doe".to_string()),
            groups: Vec::new(),
        }
    }
}

impl UserFetcher for SimulatedFetcher {
    fn fetch_current_user(&self) -> BoxFuture<'_, Result<User, FetchError>> {
        Box::pin(async move {
            debug!(delay_ms = self.delay.as_millis() as u64, "Simulating user fetch");

            tokio::time::sleep(self.delay).await;

            Ok(Self::canned_user())
        })
    }
}
