//! The storefront's application state and its persistence boundary.
//!
//! State is read from storage once in [`Storefront::new`] and written back after
//! every mutation. Operations live in `services::*` as `impl Storefront` blocks.

use std::sync::Arc;

use crate::{
    api::ApiClient,
    config::{CartSyncPolicy, StorefrontConfig},
    error::{AppError, AppResult},
    models::{CartItem, Order, PosCartItem, UiCategory, UiProduct, UserRole},
    state::{AppState, PersistedState, PersistedStateRef, STATE_VERSION},
    storage::{FileStore, KeyValueStore, STATE_KEY},
};

/// How a read operation obtained the data now in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Fresh data from the backend.
    Live,
    /// The backend failed and placeholder data was put in place.
    Placeholder { reason: String },
    /// The backend failed and the previous data was kept.
    Stale { reason: String },
    /// Nothing was requested, e.g. a cart sync while signed out.
    Skipped,
}

impl FetchOutcome {
    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Live)
    }
}

#[derive(Debug)]
pub struct Storefront {
    pub(crate) api: ApiClient,
    pub(crate) storage: Arc<dyn KeyValueStore>,
    pub(crate) state: AppState,
    pub(crate) cart_sync: CartSyncPolicy,
}

impl Storefront {
    pub fn new(config: &StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let api = ApiClient::new(config, storage.clone())?;
        let state = load_state(storage.as_ref());
        Ok(Self {
            api,
            storage,
            state,
            cart_sync: config.cart_sync,
        })
    }

    /// Store backed by files under the configured storage directory.
    pub fn from_config(config: &StorefrontConfig) -> AppResult<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage_dir));
        Self::new(config, storage)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_user(&self) -> Option<UserRole> {
        self.state.current_user
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.current_user.is_some()
    }

    pub fn products(&self) -> &[UiProduct] {
        &self.state.products
    }

    pub fn categories(&self) -> &[UiCategory] {
        &self.state.categories
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.state.cart
    }

    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    pub fn pos_cart(&self) -> &[PosCartItem] {
        &self.state.pos_cart
    }

    pub(crate) fn persist(&self) {
        let snapshot = PersistedStateRef {
            state: &self.state,
            version: STATE_VERSION,
        };
        let result = serde_json::to_string(&snapshot)
            .map_err(crate::error::StorageError::from)
            .and_then(|json| self.storage.set(STATE_KEY, &json));
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist store state");
        }
    }

    /// Applies the cart sync policy to the outcome of a backend cart call.
    pub(crate) fn settle(&self, operation: &str, result: AppResult<()>) -> AppResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match self.cart_sync {
                CartSyncPolicy::Strict => {
                    tracing::warn!(operation, error = %err, "cart call failed");
                    Err(err)
                }
                CartSyncPolicy::LocalFallback => {
                    tracing::warn!(operation, error = %err, "cart call failed, applying locally");
                    Ok(())
                }
            },
        }
    }
}

fn load_state(storage: &dyn KeyValueStore) -> AppState {
    let raw = match storage.get(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppState::default(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read stored state, starting fresh");
            return AppState::default();
        }
    };
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(persisted) => {
            if persisted.version != STATE_VERSION {
                tracing::info!(version = persisted.version, "loading state from another version");
            }
            persisted.state
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored state is unreadable, starting fresh");
            AppState::default()
        }
    }
}

pub(crate) fn backend_id(id: &str) -> AppResult<i64> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("product id {id} is not a backend id")))
}
