//! Shared primitives for the mlmetrics workspace.
//!
//! `mlmetrics-core` provides the foundation that the other crates build on:
//!
//! - **Error types**: [`MetricsError`] and [`Result`] for structured error handling
//! - **Traits**: [`Label`] for class labels, [`Numeric`] for regression values
//! - **Float labels**: [`FloatLabel`], a hashable wrapper for float-coded classes

pub mod error;
pub mod traits;

pub use error::{MetricsError, Result};
pub use traits::*;
