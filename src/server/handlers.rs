use super::AppState;
use super::response::{error_message, error_response, success_message, success_with};
use crate::prelude::Contact;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

/// Request body for add and update. Absent or null fields count as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactPayload {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Substring to look for in name, phone or email
    pub q: Option<String>,
    /// `name` orders the result by name
    pub sort: Option<String>,
}

fn parse_payload(body: &[u8]) -> Result<ContactPayload, Response> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "request body is not a contact object");
        error_message(StatusCode::BAD_REQUEST, "Invalid JSON body")
    })
}

pub async fn healthz_handler() -> &'static str {
    "ok"
}

pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let sorted = params
        .sort
        .as_deref()
        .is_some_and(|key| key.eq_ignore_ascii_case("name"));

    let result = state.with_store(|store| {
        let found = match params.q.as_deref() {
            Some(query) => store.search(query),
            None => store.list(false),
        };
        let mut contacts: Vec<Contact> = found.into_iter().cloned().collect();
        if sorted {
            contacts.sort_by_key(|c| c.name.to_lowercase());
        }
        Ok(contacts)
    });

    match result {
        Ok(contacts) => {
            info!(count = contacts.len(), query = ?params.q, "GET /api/contacts");
            let count = contacts.len();
            success_with(json!({ "data": contacts, "count": count }))
        }
        Err(e) => error_response(&e),
    }
}

pub async fn find_contact(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.with_store(|store| store.find(&name).cloned()) {
        Ok(contact) => success_with(json!({ "data": contact })),
        Err(e) => error_response(&e),
    }
}

pub async fn add_contact(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    info!(name = payload.name(), "POST add");

    match state.with_store(|store| store.add(payload.name(), payload.phone(), payload.email())) {
        Ok(_) => success_message("Contact added"),
        Err(e) => error_response(&e),
    }
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(resp) => return resp,
    };
    info!(from = %name, to = payload.name(), "PUT update");

    let result = state.with_store(|store| {
        store.update(&name, payload.name(), payload.phone(), payload.email())
    });

    match result {
        Ok(_) => success_message("Contact updated"),
        Err(e) => error_response(&e),
    }
}

pub async fn delete_contact(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.with_store(|store| store.delete(&name)) {
        Ok(_) => {
            info!(name = %name, "DELETE ok");
            success_message(&format!("Deleted '{}'", name))
        }
        Err(e) => error_response(&e),
    }
}
