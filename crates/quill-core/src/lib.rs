//! # quill-core - Core Types
//!
//! Foundation crate for Quill. Provides the error type shared by every
//! layer and the logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-based tracing subscriber, filtered by `QUILL_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use quill_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;

pub use error::{Error, Result, ResultExt};
