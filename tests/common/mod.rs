#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::Response,
    routing::post,
};
use serde_json::json;
use teddylove_storefront::{
    CartSyncPolicy, KeyValueStore, MemoryStore, Storefront, StorefrontConfig,
};

/// Nothing listens here, so every request fails to connect.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<Recorded>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.all().into_iter().map(|r| r.path).collect()
    }

    pub fn hit(&self, path: &str) -> bool {
        self.all().iter().any(|r| r.path == path)
    }

    pub fn last(&self, path: &str) -> Option<Recorded> {
        self.all().into_iter().rev().find(|r| r.path == path)
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub log: RequestLog,
}

/// Serves `api` under `/api` on an ephemeral port and records every request.
pub async fn spawn(api: Router) -> anyhow::Result<MockBackend> {
    let log = RequestLog::default();
    let app = Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(MockBackend {
        base_url: format!("http://{addr}/api"),
        log,
    })
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    log.0.lock().unwrap().push(Recorded {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().map(str::to_string),
        authorization,
    });
    next.run(request).await
}

/// A router that accepts any login and answers with `role`.
pub fn auth_routes(role: &'static str) -> Router {
    Router::new().route(
        "/auth/login",
        post(move || async move {
            Json(json!({
                "token": "tok-123",
                "username": "alice",
                "email": "alice@example.com",
                "role": role,
            }))
        }),
    )
}

pub fn storefront(
    base_url: &str,
    policy: CartSyncPolicy,
) -> anyhow::Result<(Storefront, Arc<dyn KeyValueStore>)> {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let config = StorefrontConfig::new(base_url).with_cart_sync(policy);
    let store = Storefront::new(&config, storage.clone())?;
    Ok((store, storage))
}
