use std::collections::HashMap;
use std::io;
use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use catalog_core::{IgnoreLock as _, Request};
use serde_json::{Value, json, to_value};
use tokio::net::TcpListener;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

use crate::FixtureData;

/// Canned responses keyed by path and query.
type Routes = HashMap<String, (StatusCode, Value)>;

/// State shared between the server thread and the test.
struct Shared {
    routes: Routes,
    hits: Mutex<Vec<String>>,
}

/// Loopback HTTP server answering the catalog endpoints from fixture data.
///
/// Runs on its own thread and runtime so both sync and async tests can use it.
/// Unknown paths answer `404` with an empty object. The server stops on drop.
pub struct FixtureServer {
    base_url: String,
    shared: Arc<Shared>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FixtureServer {
    /// Serves `data`.
    ///
    /// # Errors
    /// Returns an error if the loopback socket or the runtime cannot be created.
    pub fn start(data: &FixtureData) -> io::Result<Self> {
        Self::start_with(data, Vec::new())
    }

    /// Serves `data`, with `overrides` replacing or adding responses by path.
    ///
    /// # Errors
    /// Returns an error if the loopback socket or the runtime cannot be created.
    pub fn start_with(
        data: &FixtureData,
        overrides: Vec<(String, StatusCode, Value)>,
    ) -> io::Result<Self> {
        let mut routes = routes_for(data)?;
        for (path, status, body) in overrides {
            routes.insert(path, (status, body));
        }

        let shared = Arc::new(Shared {
            routes,
            hits: Mutex::new(Vec::new()),
        });

        let listener = StdTcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let app = Router::new()
            .fallback(serve_fixture)
            .with_state(Arc::clone(&shared));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = thread::spawn(move || {
            runtime.block_on(async move {
                let Ok(listener) = TcpListener::from_std(listener) else {
                    return;
                };
                let served = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        drop(shutdown_rx.await);
                    })
                    .await;
                drop(served);
            });
        });

        Ok(Self {
            base_url,
            shared,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    /// `http://127.0.0.1:<port>` of the running server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Paths (with query) received so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.shared.hits.lock_ignore_poison().clone()
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            drop(shutdown.send(()));
        }
        if let Some(thread) = self.thread.take() {
            drop(thread.join());
        }
    }
}

/// A loopback URL nothing is listening on.
///
/// # Errors
/// Returns an error if a loopback port cannot be reserved.
pub fn closed_port_url() -> io::Result<String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

fn routes_for(data: &FixtureData) -> io::Result<Routes> {
    let mut routes = Routes::new();
    let mut insert = |request: Request, body: Value| {
        routes.insert(request.path(), (StatusCode::OK, body));
    };

    insert(Request::Posts, to_value(&data.posts)?);
    insert(Request::Users, to_value(&data.users)?);
    for post in &data.posts {
        insert(Request::Post(post.id), to_value(post)?);
        insert(Request::PostComments(post.id), to_value(data.comments_for(post.id))?);
    }
    for user in &data.users {
        insert(Request::User(user.id), to_value(user)?);
        insert(Request::UserPosts(user.id), to_value(data.posts_for(user.id))?);
    }

    Ok(routes)
}

async fn serve_fixture(State(shared): State<Arc<Shared>>, uri: Uri) -> (StatusCode, Json<Value>) {
    let key = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), |path| path.as_str().to_owned());
    shared.hits.lock_ignore_poison().push(key.clone());

    match shared.routes.get(&key) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}
