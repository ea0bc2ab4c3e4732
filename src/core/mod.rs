//! Core battery validation logic
//!
//! Everything in this module is pure: thresholds, classification and the
//! scenario tables perform no I/O and hold no mutable state, so they can be
//! shared freely across threads and tested in isolation.

pub mod scenarios;
pub mod threshold;
pub mod validation;

#[cfg(test)]
mod validation_proptest;
