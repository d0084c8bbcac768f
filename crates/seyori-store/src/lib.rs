//! Contact book persistence and validation.
//!
//! The whole backend state is one JSON document, the [`model::ContactBook`],
//! persisted as a flat file. [`store::ContactStore`] is the seam between
//! handlers and storage: the binary wires in [`store::FileStore`], tests an
//! in-memory fake.

pub mod error;
pub mod model;
pub mod store;
pub mod validate;
