//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: registration-time errors
//! - [`string`]: name normalization helpers

pub mod error;
pub mod string;
