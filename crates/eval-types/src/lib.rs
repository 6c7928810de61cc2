//! Eval Types
//!
//! This crate defines the value types shared across the evaluation ecosystem.
//! It provides `FactValue`, the dynamically typed value that flows into and
//! out of every calculator, and exists as its own crate so that future crates
//! consuming calculator results do not depend on the calculator machinery.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::FactValue;
