//! vCard 3.0 generation for the contact export endpoint.
//!
//! ## Overview
//!
//! This crate builds vCard text from contact data. Only the properties the
//! export endpoint needs are supported: structured/formatted name, cell and
//! work phone, and a free-text note.
//!
//! ## Usage
//!
//! ```rust
//! use seyori_vcard::{Card, serialize};
//!
//! let mut card = Card::from_full_name("Ada Lovelace").unwrap();
//! card.cell_phone = Some("15551234567".to_string());
//!
//! let output = serialize(&card);
//! assert!(output.contains("N:Lovelace;Ada;;;"));
//! assert!(output.contains("TEL;TYPE=CELL:15551234567"));
//! ```
//!
//! Content lines are folded at 75 octets per RFC 6350 §3.2 and text values
//! are escaped per RFC 6350 §3.4.

pub mod build;
pub mod card;
pub mod error;

pub use build::serialize;
pub use card::Card;
pub use error::{VcardError, VcardResult};
