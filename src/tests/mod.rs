//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn canonical_form()`
//! * `fn solution()`
//!
//! Each problem is solved both with rational numbers, exactly, and with floating point numbers.
pub mod problem_1;
