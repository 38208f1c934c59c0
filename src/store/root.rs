use crate::core::config::Config;
use crate::fetch::UserFetcher;
use crate::store::user::UserModule;
use std::sync::Arc;

/// Root store: an immutable version string plus the namespaced modules.
///
/// Construct one per application (or per test) and share clones; there is no
/// process-wide instance. The root performs no cross-module logic.
#[derive(Clone)]
pub struct Store {
    version: String,
    /// The `user` namespace.
    pub user: UserModule,
}

impl Store {
    pub fn new(config: &Config, fetcher: Arc<dyn UserFetcher>) -> Self {
        Self {
            version: config.store.version.clone(),
            user: UserModule::new(fetcher),
        }
    }

    /// Store version, fixed at construction.
    pub fn version(&self) -> &str {
        &self.version
    }
}
