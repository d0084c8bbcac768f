//! Seyori contact backend - core configuration, constants, and errors.

pub mod config;
pub mod constants;
pub mod error;
