//! Shared integration-test harness: an in-process static site served by
//! axum on an ephemeral port, recording every request it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const CONF: &str = r#"{"icon":"📘","title":"My Project","subtitle":"docs"}"#;
pub const README: &str = "preamble text<!-- BODY -->\n# Hello\n";

/// A request as seen by the site server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Request path without the leading slash.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
}

#[derive(Default)]
struct SiteState {
    files: HashMap<String, (StatusCode, String)>,
    hits: Mutex<Vec<Hit>>,
}

/// Builder for the files a [`SiteServer`] serves.
#[derive(Default)]
pub struct Site {
    files: HashMap<String, (StatusCode, String)>,
}

impl Site {
    /// A site serving the standard config and README.
    pub fn standard() -> Self {
        Self::default()
            .file("assets/conf.json", CONF)
            .file("README.md", README)
    }

    /// Serves `body` with 200 at `path`.
    pub fn file(self, path: &str, body: &str) -> Self {
        self.status(path, StatusCode::OK, body)
    }

    /// Serves `body` with `status` at `path`.
    pub fn status(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.files
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Removes `path`, making it a 404.
    pub fn without(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    /// Starts serving on `127.0.0.1:0`.
    pub async fn serve(self) -> SiteServer {
        SiteServer::start(self).await
    }
}

/// A running site server. Aborted on drop.
pub struct SiteServer {
    pub base_url: String,
    state: Arc<SiteState>,
    handle: JoinHandle<()>,
}

impl SiteServer {
    async fn start(site: Site) -> Self {
        let state = Arc::new(SiteState {
            files: site.files,
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(serve_file)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind site server");
        let addr = listener.local_addr().expect("no local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("site server failed");
        });

        Self {
            base_url: format!("http://{addr}/"),
            state,
            handle,
        }
    }

    /// Every request received so far, in arrival order.
    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }
}

impl Drop for SiteServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_file(State(state): State<Arc<SiteState>>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/').to_string();
    state.hits.lock().unwrap().push(Hit {
        path: path.clone(),
        query: uri.query().map(str::to_string),
    });

    match state.files.get(&path) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
