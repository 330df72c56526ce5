#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

use yt_summary_web::config::{ClientConfig, Config};
use yt_summary_web::AppState;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn proxy_state(upstream: &str, static_dir: &Path, summarize_path: Option<&str>) -> AppState {
    let mut vars = HashMap::new();
    vars.insert("UPSTREAM_URL", upstream.to_string());
    vars.insert("STATIC_DIR", static_dir.display().to_string());
    if let Some(path) = summarize_path {
        vars.insert("SUMMARIZE_PATH", path.to_string());
    }

    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    AppState::new(config)
}

pub fn client_config(api_url: &str) -> ClientConfig {
    let api_url = api_url.to_string();
    ClientConfig::from_lookup(|key| (key == "API_URL").then(|| api_url.clone())).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
