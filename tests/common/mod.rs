use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use http_body_util::BodyExt;
use ramble_back::{
    config::AppConfig,
    dao::profile_store::memory::MemoryProfileStore,
    routes,
    state::{AppState, SharedState},
};
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> (Router, SharedState) {
    let state = AppState::new(AppConfig::in_memory(), Arc::new(MemoryProfileStore::new()));
    (routes::router(state.clone()), state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

pub async fn json(resp: Response<Body>) -> Value {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
