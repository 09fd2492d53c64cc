//! # modhub-sdk
//!
//! SDK shared by module authors and the ModHub host. A module package is a
//! `cdylib` crate that implements one or more capability contracts and
//! exports a manifest describing its constructible types.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use greeter_api::{Greeter, GREETER};
//!
//! #[derive(Debug, Default)]
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!     fn name(&self) -> &'static str {
//!         "english"
//!     }
//!
//!     fn greet(&self, who: &str) -> String {
//!         format!("Hello, {who}!")
//!     }
//! }
//!
//! modhub_sdk::export_package! {
//!     EnglishGreeter as dyn Greeter => GREETER,
//! }
//! ```
//!
//! The host discovers the package by contract token; it never names the
//! concrete types. Host and package must be built against the same SDK
//! version and Rust toolchain; both are recorded in the manifest and
//! verified before any entry is resolved.

pub mod contract;
pub mod macros;
pub mod manifest;

pub use contract::Contract;
pub use manifest::{MANIFEST_SYMBOL, ManifestFn, PackageManifest, TypeEntry, VersionMismatch};

/// SDK version both sides of a package boundary must share.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rust compiler version the crate was built with.
pub const RUSTC_VERSION: &str = env!("MODHUB_RUSTC_VERSION");

/// Prelude for convenient imports in module packages.
pub mod prelude {
    pub use crate::contract::Contract;
    pub use crate::export_package;
    pub use crate::manifest::{PackageManifest, TypeEntry};
}
