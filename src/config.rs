use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::anyhow;

/// What the store does when the backend rejects a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartSyncPolicy {
    /// Surface the error and leave the local cart untouched.
    #[default]
    Strict,
    /// Log the error and apply the mutation locally anyway.
    LocalFallback,
}

impl FromStr for CartSyncPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CartSyncPolicy::Strict),
            "local-fallback" | "local_fallback" | "fallback" => Ok(CartSyncPolicy::LocalFallback),
            other => Err(anyhow!("unknown cart sync policy: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub api_base_url: String,
    pub storage_dir: PathBuf,
    pub cart_sync: CartSyncPolicy,
    pub request_timeout: Option<Duration>,
}

impl StorefrontConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            storage_dir: PathBuf::from(".teddylove"),
            cart_sync: CartSyncPolicy::default(),
            request_timeout: None,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = env::var("STOREFRONT_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        let storage_dir = env::var("STOREFRONT_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".teddylove"));
        let cart_sync = match env::var("STOREFRONT_CART_SYNC") {
            Ok(value) => value.parse()?,
            Err(_) => CartSyncPolicy::default(),
        };
        let request_timeout = env::var("STOREFRONT_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);
        Ok(Self {
            api_base_url,
            storage_dir,
            cart_sync,
            request_timeout,
        })
    }

    pub fn with_cart_sync(mut self, policy: CartSyncPolicy) -> Self {
        self.cart_sync = policy;
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
