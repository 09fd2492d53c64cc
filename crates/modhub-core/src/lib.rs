//! # modhub-core
//!
//! Core crate for ModHub. Contains configuration schemas and the unified
//! error system shared by the loader crates and the host binary.
//!
//! This crate has **no** internal dependencies on other ModHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
