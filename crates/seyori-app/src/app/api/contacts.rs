//! List and create handlers for `/api/contacts`.

use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode};
use serde::{Deserialize, Serialize};

use seyori_core::constants::CONTACTS_ROUTE_COMPONENT;
use seyori_store::model::{ContactBook, ContactRecord};
use seyori_store::store::ContactStore;
use seyori_store::validate::{Field, validate_new_contact};

use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Error response payload; `field` tags validation and duplicate failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl ErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            field: None,
        }
    }
}

/// ## Summary
/// Create contact request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub full_name: String,
    pub number: String,
    pub country_code: String,
}

/// Public projection of a stored record: `{id, fullName, number, timestamp}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactView<'a> {
    id: &'a str,
    full_name: &'a str,
    number: &'a str,
    timestamp: &'a chrono::DateTime<chrono::Utc>,
}

impl<'a> From<&'a ContactRecord> for ContactView<'a> {
    fn from(record: &'a ContactRecord) -> Self {
        Self {
            id: &record.id,
            full_name: &record.full_name,
            number: &record.number,
            timestamp: &record.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    count: usize,
    contacts: Vec<ContactView<'a>>,
}

#[derive(Debug, Serialize)]
struct CreateResponse {
    success: bool,
    count: usize,
    message: &'static str,
}

/// ## Summary
/// Dispatches `/api/contacts` by method: GET lists the book, POST appends a
/// validated contact, anything else gets 405. The store is re-read on every
/// request; nothing is cached between requests.
///
/// ## Errors
/// Returns HTTP 400 on validation or duplicate rejection
/// Returns HTTP 405 for unsupported methods
/// Returns HTTP 500 if the book cannot be read or written
#[handler]
#[tracing::instrument(skip_all, fields(method = %req.method()))]
pub async fn contacts(req: &mut Request, depot: &Depot, res: &mut Response) {
    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Contact store unavailable");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Internal server error")));
            return;
        }
    };

    if let Err(e) = store.ensure_exists().await {
        tracing::error!(error = %e, "Failed to initialize contact book");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        res.render(Json(ErrorResponse::new("Internal server error")));
        return;
    }

    match req.method().as_str() {
        "GET" => list_contacts(store.as_ref(), res).await,
        "POST" => create_contact(req, store.as_ref(), res).await,
        _ => {
            res.status_code(StatusCode::METHOD_NOT_ALLOWED);
            res.render(Text::Plain("Method Not Allowed"));
        }
    }
}

async fn list_contacts(store: &dyn ContactStore, res: &mut Response) {
    let book = match store.load().await {
        Ok(book) => book,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load contact book");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Failed to read contacts")));
            return;
        }
    };

    res.render(Json(ListResponse {
        count: book.count,
        contacts: book.contacts.iter().map(ContactView::from).collect(),
    }));
}

async fn create_contact(req: &mut Request, store: &dyn ContactStore, res: &mut Response) {
    let create_req: CreateContactRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to parse create contact request");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse::new("Invalid request body")));
            return;
        }
    };

    let mut book: ContactBook = match store.load().await {
        Ok(book) => book,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load contact book");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("Failed to read contacts")));
            return;
        }
    };

    let new_contact = match validate_new_contact(
        &book,
        &create_req.full_name,
        &create_req.country_code,
        &create_req.number,
    ) {
        Ok(c) => c,
        Err(rejection) => {
            tracing::debug!(field = ?rejection.field, "Rejected contact: {rejection}");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: rejection.message,
                field: rejection.field,
            }));
            return;
        }
    };

    let record = ContactRecord::new(new_contact.full_name, new_contact.number);
    let record_id = record.id.clone();
    book.push(record);

    if let Err(e) = store.save(&book).await {
        tracing::error!(error = %e, "Failed to save contact book");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        res.render(Json(ErrorResponse::new("Failed to save contact")));
        return;
    }

    tracing::info!(id = %record_id, count = book.count, "Contact saved");

    res.render(Json(CreateResponse {
        success: true,
        count: book.count,
        message: "Contact saved successfully",
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACTS_ROUTE_COMPONENT).goal(contacts)
}
