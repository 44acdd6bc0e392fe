#![forbid(unsafe_code)]

//! Localized message storage and interpolation for Brickle.
//!
//! # Role in Brickle
//! `brickle-i18n` isolates localization concerns: a string catalog keyed
//! by message ids, and the `%1` / `%{msg_key}` interpolation grammar
//! block definitions use to reference catalog entries from their labels.
//!
//! # How it fits in the system
//! Block definitions resolve their label strings through this crate
//! before handing them to `brickle-text` for wrapping and layout. It
//! depends on nothing above it, keeping localization reusable and
//! testable on its own.

pub mod catalog;
pub mod interpolate;

pub use catalog::{CatalogError, DEFAULT_PREFIX, MessageCatalog, is_valid_key};
pub use interpolate::{
    Token, check_message_references, replace_message_references, tokenize_interpolation,
};
