//! vCard export handler for `/api/export`.

use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode};
use serde::Serialize;

use seyori_core::constants::{CONTACT_COUNT_HEADER, EXPORT_FILENAME, EXPORT_ROUTE_COMPONENT};
use seyori_store::model::ContactRecord;
use seyori_vcard::{Card, serialize};

use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Export error payload
#[derive(Debug, Serialize)]
pub struct ExportErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ExportErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            suggestion: None,
        }
    }
}

/// ## Summary
/// Exports every stored contact as a single vCard attachment.
///
/// Export is best-effort per record: a record whose card cannot be built is
/// logged and skipped rather than aborting the whole download. The
/// `X-Contact-Count` header always reflects the number of records in the
/// book, skipped or not.
///
/// ## Errors
/// Returns HTTP 404 if the book holds no contacts
/// Returns HTTP 405 for non-GET methods
/// Returns HTTP 500 if the book cannot be read or parsed
#[handler]
#[tracing::instrument(skip_all, fields(method = %req.method()))]
pub async fn export(req: &mut Request, depot: &Depot, res: &mut Response) {
    if req.method().as_str() != "GET" {
        res.status_code(StatusCode::METHOD_NOT_ALLOWED);
        res.render(Text::Plain("Method Not Allowed"));
        return;
    }

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Contact store unavailable");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ExportErrorResponse::new(
                "Failed to generate contact file",
            )));
            return;
        }
    };

    let book = match store.load().await {
        Ok(book) => book,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load contact book for export");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ExportErrorResponse::new(
                "Failed to generate contact file",
            )));
            return;
        }
    };

    if book.is_empty() {
        res.status_code(StatusCode::NOT_FOUND);
        res.render(Json(ExportErrorResponse {
            success: false,
            error: "No contacts available to export".to_string(),
            suggestion: Some("Add contacts first before exporting".to_string()),
        }));
        return;
    }

    let body: String = book
        .contacts
        .iter()
        .filter_map(|record| match build_card(record) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!(id = %record.id, error = %e, "Skipping contact that failed to render");
                None
            }
        })
        .collect();

    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Type",
        salvo::http::HeaderValue::from_static("text/vcard; charset=utf-8"),
        true,
    );
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(
        "Content-Disposition",
        format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        true,
    );
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Header addition failure is non-fatal"
    )]
    let _ = res.add_header(CONTACT_COUNT_HEADER, book.count.to_string(), true);
    #[expect(
        clippy::let_underscore_must_use,
        reason = "Write body failure is non-fatal"
    )]
    let _ = res.write_body(body);
}

/// Builds one card's text from a stored record.
///
/// First name is the first whitespace token of the display name, last name
/// the rest. The digits-only phone lands in both the cell and work fields,
/// mirroring how the book has always been exported.
fn build_card(record: &ContactRecord) -> seyori_vcard::VcardResult<String> {
    let mut card = Card::from_full_name(&record.full_name)?;

    let digits = seyori_store::validate::normalize_digits(&record.number);
    card.cell_phone = Some(digits.clone());
    card.work_phone = Some(digits);
    card.note = Some(format!(
        "Added to Seyori's contact network on {}",
        record.timestamp.format("%Y-%m-%d")
    ));

    Ok(serialize(&card))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EXPORT_ROUTE_COMPONENT).goal(export)
}
