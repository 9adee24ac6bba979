//! Shared primitives and traits for the zeoring ring-search workspace.
//!
//! `zeoring-core` provides the foundation the other crates build on:
//!
//! - **Error types**: [`ZeoringError`] and [`Result`] for structured error handling
//! - **Traits**: [`Annotated`], [`Summarizable`], [`ContentAddressable`]
//! - **Hashing**: SHA-256 content addressing for framework provenance

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{Result, ZeoringError};
pub use traits::*;
