//! Best-effort description translation.
//!
//! Translation must never block or fail the discovery flow: every error
//! path terminates in a local truncation fallback, so callers always get
//! non-empty, bounded-length text back.

pub mod client;
pub mod error;
pub mod fallback;

pub use client::Translator;
pub use error::TranslateError;
pub use fallback::{NO_DESCRIPTION, fallback};
