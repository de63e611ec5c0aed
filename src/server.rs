//! REST front end over the contact store.

pub mod handlers;
mod response;

use crate::config::{Config, ServerConfig};
use crate::prelude::{AppError, ContactStore};
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::{Next, from_fn},
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<ContactStore>>,
}

impl AppState {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` against the store after re-reading the backing file, so
    /// changes made by other processes are picked up.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut ContactStore) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut store = self.store.lock()?;
        store.reload();
        f(&mut store)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::add_contact),
        )
        .route(
            "/api/contacts/:name",
            get(handlers::find_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(from_fn(cors_middleware))
        .with_state(state)
}

/// Any origin may call the API.
async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = resp.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
    resp
}

pub async fn run(
    server: ServerConfig,
    config: &Config,
    store: ContactStore,
) -> Result<(), AppError> {
    info!(
        file = %config.contacts_file.display(),
        contacts = store.len(),
        "contact book server starting"
    );

    let listener = TcpListener::bind(server.address()).await?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, build_router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
