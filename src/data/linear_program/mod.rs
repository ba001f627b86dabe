//! # Representing linear programs
//!
//! Linear programs are built in general form, which may contain any type of constraint and
//! variable bound. Before solving, they are rewritten in canonical form, which contains equality
//! constraints and nonnegative variables only.
pub mod elements;
pub mod general_form;
pub mod solution;
