//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The comparison with the `microlp` backend is only ran when that feature is enabled.
mod textbook;
mod export;
#[cfg(feature = "microlp")]
mod backends;
