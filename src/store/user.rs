use crate::core::error::FetchError;
use crate::fetch::UserFetcher;
use crate::models::user::User;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

type Subscriber = Box<dyn Fn(&UserState) + Send + Sync>;

/// State owned by the user module.
///
/// `loading` is true exactly while a fetch is in flight; `current_user` is
/// replaced wholesale by the loaded mutation and starts out anonymous.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserState {
    pub loading: bool,
    pub current_user: User,
}

/// The `user` namespace of the store.
///
/// Mutations are the only writers of `UserState`; each one notifies
/// subscribers with the post-mutation state. Getters recompute from the
/// current state on every call.
pub struct UserModule {
    state: Arc<RwLock<UserState>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    fetcher: Arc<dyn UserFetcher>,
}

impl UserModule {
    pub fn new(fetcher: Arc<dyn UserFetcher>) -> Self {
        Self {
            state: Arc::new(RwLock::new(UserState::default())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            fetcher,
        }
    }

    // -- Mutations --

    /// Mark a user fetch as in flight. Idempotent; never touches the user.
    pub fn user_data_loading(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.loading = true;
        }

        debug!("User data loading");
        self.notify();
    }

    /// Store a freshly fetched user and clear the loading flag.
    ///
    /// The payload replaces the prior user wholesale under the write lock, so
    /// readers never observe a partially updated user.
    pub fn user_data_loaded(&self, payload: User) {
        {
            let mut state = self.state.write().unwrap();
            state.loading = false;
            state.current_user = payload;
        }

        debug!("User data loaded");
        self.notify();
    }

    /// Clear the loading flag after a failed fetch, leaving the user as-is.
    pub fn user_data_load_failed(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.loading = false;
        }

        debug!("User data load failed");
        self.notify();
    }

    // -- Actions --

    /// Fetch the current user through the configured port.
    ///
    /// The loading mutation is committed before the first await, so
    /// `loading()` reads true as soon as the returned future is polled.
    /// Concurrent invocations are not serialized: each commits its own
    /// loading/loaded pair and the last loaded commit wins.
    pub async fn load_current_user_data(&self) -> Result<(), FetchError> {
        self.user_data_loading();

        match self.fetcher.fetch_current_user().await {
            Ok(user) => {
                debug!(username = %user.username, "User fetch succeeded");
                self.user_data_loaded(user);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "User fetch failed");
                self.user_data_load_failed();
                Err(e)
            }
        }
    }

    // -- Getters --

    /// Username of the current user, empty before the first load.
    pub fn user_name(&self) -> String {
        self.state.read().unwrap().current_user.username.clone()
    }

    /// Display name assembled from the name parts that are present.
    ///
    /// Absent or empty parts are omitted and the rest joined with single
    /// spaces, so an all-empty user derives an empty string.
    pub fn full_name(&self) -> String {
        let state = self.state.read().unwrap();
        let user = &state.current_user;

        [
            user.first_name.as_deref(),
            user.middle_name.as_deref(),
            user.last_name.as_deref(),
        ]
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn loading(&self) -> bool {
        self.state.read().unwrap().loading
    }

    /// Clone of the current state, for observers that want the whole thing.
    pub fn state(&self) -> UserState {
        self.state.read().unwrap().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every mutation with the post-mutation state.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&UserState) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Box::new(callback));
    }

    fn notify(&self) {
        let state = self.state.read().unwrap();
        let subscribers = self.subscribers.read().unwrap();

        for subscriber in subscribers.iter() {
            subscriber(&state);
        }
    }
}

impl Clone for UserModule {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}
