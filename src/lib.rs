//! Business logic for the yacht charter lead/quoting service.
//!
//! - [`pricing`]: quote calculation and text rendering
//! - [`models`]: record and request types shared with the storage, mail and HTTP layers

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

#[cfg(test)]
mod test_utils;

pub use error::{AppError, QuoteError, Result};
