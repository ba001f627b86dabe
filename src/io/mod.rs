//! # Reading and writing of linear programs
//!
//! This module provides write functionality for linear program formats.
pub mod mps;
