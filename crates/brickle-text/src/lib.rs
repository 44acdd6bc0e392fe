#![forbid(unsafe_code)]

//! Label-text utilities for Brickle.
//!
//! # Role in Brickle
//! `brickle-text` owns the pure text transforms the block editor applies
//! to labels: wrapping label text to a cell budget, factoring shared
//! words out of sibling labels, and generating serialization-safe unique
//! ids.
//!
//! # How it fits in the system
//! The rendering layer measures a block's pixel budget, converts it to a
//! character-cell limit, and calls [`wrap::wrap`] before laying out the
//! label. Nothing here touches rendering or the DOM, keeping the text
//! layer deterministic and testable on its own.

pub mod factoring;
pub mod uid;
pub mod wrap;

pub use factoring::{common_word_prefix, common_word_suffix, shortest_string_length};
pub use uid::{gen_uid, gen_uid_with};
pub use wrap::{BreakDecision, WrapObjective, wrap, wrap_with_objective};
