#![allow(clippy::unused_async, unused_must_use)]
//! Tests for the vCard export endpoint.

use std::sync::Arc;

use salvo::http::StatusCode;

use seyori_store::model::{ContactBook, ContactRecord};
use seyori_store::store::MemoryStore;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn exporting_an_empty_store_is_not_found() {
    let service = create_test_service(Arc::new(MemoryStore::new()));

    let response = TestRequest::get(EXPORT_PATH)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let json = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No contacts available to export");
    assert!(json["suggestion"].is_string());
}

#[test_log::test(tokio::test)]
async fn export_renders_a_card_per_contact() {
    let service = create_test_service(seeded_store(&[
        ("Ada Lovelace", "+15551234567"),
        ("Alan Turing", "+447700900123"),
    ]));

    let response = TestRequest::get(EXPORT_PATH)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("Content-Type", "text/vcard")
        .assert_header_contains("Content-Disposition", "seyori_contacts.vcf")
        .assert_header_contains("x-contact-count", "2");

    let body = response.body_string();
    assert_eq!(body.matches("BEGIN:VCARD").count(), 2);
    assert!(body.contains("N:Lovelace;Ada;;;"));
    assert!(body.contains("FN:Ada Lovelace"));
    assert!(body.contains("TEL;TYPE=CELL:15551234567"));
    assert!(body.contains("TEL;TYPE=WORK:15551234567"));
    assert!(body.contains("N:Turing;Alan;;;"));
}

#[test_log::test(tokio::test)]
async fn export_skips_records_it_cannot_render() {
    // An empty name can only come from a hand-edited book; export must skip
    // it and still deliver the rest.
    let mut book = ContactBook::default();
    book.push(ContactRecord::new(
        "Ada Lovelace".to_string(),
        "+15551234567".to_string(),
    ));
    book.push(ContactRecord::new(String::new(), "+15559999999".to_string()));
    let service = create_test_service(Arc::new(MemoryStore::with_book(book)));

    let response = TestRequest::get(EXPORT_PATH)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("x-contact-count", "2");

    let body = response.body_string();
    assert_eq!(body.matches("BEGIN:VCARD").count(), 1);
    assert!(body.contains("N:Lovelace;Ada;;;"));
}

#[test_log::test(tokio::test)]
async fn export_with_unsupported_method_gets_405() {
    let service = create_test_service(seeded_store(&[("Ada Lovelace", "+15551234567")]));

    TestRequest::post(EXPORT_PATH)
        .send(&service)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED)
        .assert_body_contains("Method Not Allowed");
}

#[test_log::test(tokio::test)]
async fn export_load_failure_surfaces_as_500() {
    let store = Arc::new(MemoryStore::new());
    store.fail_loads();
    let service = create_test_service(store);

    let response = TestRequest::get(EXPORT_PATH)
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to generate contact file");
}
