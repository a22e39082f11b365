pub mod resource;

use std::{
    collections::HashMap,
    net::{SocketAddr, TcpListener},
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use cumulus::{auth::AuthHeader, resource::ResourceRecord, ApiError, Config};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tracing::{error, info};

pub type Rejection = (StatusCode, Json<ApiError>);

pub fn reject(code: StatusCode, status: &str, message: &str) -> Rejection {
    (code, Json(ApiError::new(status, message)))
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    auth: AuthHeader,
    root: Mutex<Value>,
    resources: Mutex<HashMap<String, ResourceRecord>>,
    next_id: AtomicU64,
    deletions: AtomicUsize,
}

impl AppState {
    pub fn new(auth: AuthHeader) -> Self {
        AppState {
            inner: Arc::new(Inner {
                auth,
                root: Mutex::new(json!({ "status": "OK" })),
                resources: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(1),
                deletions: AtomicUsize::new(0),
            }),
        }
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), Rejection> {
        let authorized = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| self.inner.auth.matches(value));

        if !authorized {
            return Err(reject(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or invalid bearer token!",
            ));
        }

        Ok(())
    }

    pub fn next_id(&self) -> String {
        format!("res-{}", self.inner.next_id.fetch_add(1, Ordering::Relaxed))
    }

    pub fn resources(&self) -> MutexGuard<'_, HashMap<String, ResourceRecord>> {
        self.inner
            .resources
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_deletion(&self) {
        self.inner.deletions.fetch_add(1, Ordering::SeqCst);
    }

    pub fn deletions(&self) -> usize {
        self.inner.deletions.load(Ordering::SeqCst)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resources().contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.resources().is_empty()
    }

    /// Overrides the stored status of a resource. False if it does not exist.
    pub fn set_status(&self, id: &str, status: &str) -> bool {
        match self.resources().get_mut(id) {
            Some(record) => {
                record.status = status.to_string();
                true
            }
            None => false,
        }
    }

    pub fn root_body(&self) -> Value {
        self.inner
            .root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_root_body(&self, body: Value) {
        *self.inner.root.lock().unwrap_or_else(PoisonError::into_inner) = body;
    }
}

async fn get_root(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Rejection> {
    state.authorize(&headers)?;

    Ok(Json(state.root_body()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/resources", post(resource::post_resource))
        .route(
            "/resources/:id",
            get(resource::get_resource).delete(resource::delete_resource),
        )
        .with_state(state)
}

pub struct Handle {
    addr: SocketAddr,
    state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Handle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self, token: &str) -> Config {
        Config::new(self.base_url(), token)
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub fn spawn(token: &str) -> std::io::Result<Handle> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;

    let state = AppState::new(AuthHeader::bearer(token));
    let app = router(state.clone());
    let (tx, rx) = oneshot::channel::<()>();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    std::thread::spawn(move || {
        runtime.block_on(async move {
            let server = match axum::Server::from_tcp(listener) {
                Ok(server) => server,
                Err(err) => {
                    error!(%err, "failed to start server");
                    return;
                }
            };

            info!(%addr, "serving");

            let shutdown = async {
                let _ = rx.await;
            };

            if let Err(err) = server
                .serve(app.into_make_service())
                .with_graceful_shutdown(shutdown)
                .await
            {
                error!(%err, "server error");
            }
        });
    });

    Ok(Handle {
        addr,
        state,
        shutdown: Some(tx),
    })
}
