//! Client-side storefront for a personalized teddy-bear shop: personalization
//! normalization, backend DTO adaptation, a persisted application store and the
//! REST client it talks through.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod money;
pub mod personalization;
pub mod response;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;

pub use api::ApiClient;
pub use config::{CartSyncPolicy, StorefrontConfig};
pub use error::{ApiError, AppError, AppResult};
pub use personalization::{CanonicalPersonalization, LegacyPersonalization, Personalization};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{FetchOutcome, Storefront};
