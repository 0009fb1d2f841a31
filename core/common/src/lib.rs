//! Common types shared across Sealbox modules.
//!
//! This module provides the error taxonomy used throughout the codebase,
//! ensuring that every crypto operation fails in a well-defined way.

pub mod error;

pub use error::{Error, Result};
