//! Non-fatal discovery diagnostics.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Category of a reported discovery failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The package's entries could not be resolved against this host.
    ResolutionFailed,
    /// A matched entry's constructor failed.
    InstantiationFailed,
}

/// A reported, non-fatal discovery failure.
///
/// One bad entry or one incompatible package never aborts discovery; the
/// failure is recorded here and returned alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Package the failure occurred in.
    pub package: PathBuf,
    /// Offending type entry, when the failure is entry-scoped.
    pub type_name: Option<String>,
    /// Failure category.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Records a package whose entries could not be resolved.
    pub fn resolution(package: &Path, message: impl Into<String>) -> Self {
        Self {
            package: package.to_path_buf(),
            type_name: None,
            kind: DiagnosticKind::ResolutionFailed,
            message: message.into(),
        }
    }

    /// Records an entry whose constructor failed.
    pub fn instantiation(package: &Path, type_name: &str, message: impl Into<String>) -> Self {
        Self {
            package: package.to_path_buf(),
            type_name: Some(type_name.to_string()),
            kind: DiagnosticKind::InstantiationFailed,
            message: message.into(),
        }
    }
}
