//! Seyori contact backend - HTTP application.

pub mod app;
pub mod error;
pub mod store_handler;
