//! Error types and result definitions for the tabwrite workspace.
//!
//! This crate provides the unified error type ([`Error`]) and result type alias
//! ([`Result<T>`]) used by every tabwrite crate. All operations that can fail
//! return `Result<T>`, and errors propagate naturally with the `?` operator.
//!
//! # Error Categories
//!
//! - **I/O errors** ([`Error::Io`]): opening, writing, or flushing the output
//!   target, carrying the underlying OS error.
//! - **Invalid arguments** ([`Error::InvalidArgumentError`]): malformed
//!   descriptor matrices, misaligned row batches, unrecognized format names.
//! - **Internal errors** ([`Error::Internal`]): violated invariants that
//!   indicate a bug rather than bad input.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
