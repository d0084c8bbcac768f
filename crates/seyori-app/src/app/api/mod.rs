mod contacts;
mod export;
mod healthcheck;

use salvo::Router;

// Re-export route constants from core
pub use seyori_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, CONTACTS_ROUTE_COMPONENT, CONTACTS_ROUTE_PREFIX,
    EXPORT_ROUTE_COMPONENT, EXPORT_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router with all endpoint handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(contacts::routes())
        .push(export::routes())
        .push(healthcheck::routes())
}
