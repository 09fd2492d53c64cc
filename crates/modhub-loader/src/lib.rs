//! # modhub-loader
//!
//! Discovery pipeline for ModHub module packages. Provides:
//!
//! - Per-package isolated loading contexts over `libloading`
//! - Contract scanning of package manifests
//! - Instantiation with per-type failure isolation
//! - Diagnostics accumulated alongside results
//!
//! The entry point is [`ModuleLoader`]: construct it with the module
//! directory, then run [`discover`](ModuleLoader::discover) with a contract
//! token to obtain every implementation exported by the packages in that
//! directory.

pub mod context;
pub mod diagnostics;
pub mod handle;
pub mod loader;
pub mod scanner;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use handle::ModuleHandle;
pub use loader::{Discovery, ModuleLoader};
pub use modhub_sdk::Contract;
