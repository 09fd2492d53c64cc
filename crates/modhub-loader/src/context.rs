//! Per-package loading contexts.
//!
//! A [`LoadingContext`] maps exactly one module package into the process and
//! resolves its manifest. Contexts are never shared or reused across
//! packages; the loader opens a fresh one per candidate and drops it before
//! moving to the next.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::Library;
use tracing::debug;

use modhub_core::error::{AppError, ErrorKind};
use modhub_sdk::{MANIFEST_SYMBOL, ManifestFn, PackageManifest};

/// Isolated code-loading context scoped to a single module package.
///
/// The mapped library sits behind an [`Arc`]: instances constructed from the
/// package clone it, so dropping the context releases the mapping only once
/// no instance needs it anymore.
pub struct LoadingContext {
    path: PathBuf,
    library: Arc<Library>,
}

impl LoadingContext {
    /// Opens a fresh context for the package at `path`.
    ///
    /// # Safety
    ///
    /// Loading a shared library runs its initializers. The package must be a
    /// trusted ModHub module package built against the same SDK and contract
    /// crates as this host.
    pub unsafe fn open(path: &Path) -> Result<Self, AppError> {
        let library = unsafe { Library::new(path) }.map_err(|e| {
            AppError::with_source(
                ErrorKind::Package,
                format!("failed to open module package '{}'", path.display()),
                e,
            )
        })?;

        debug!(package = %path.display(), "loading context opened");

        Ok(Self {
            path: path.to_path_buf(),
            library: Arc::new(library),
        })
    }

    /// Resolves the package manifest through this context.
    ///
    /// A package that does not export a readable manifest is not a valid
    /// module package.
    pub fn manifest(&self) -> Result<&PackageManifest, AppError> {
        // SAFETY: symbol type matches the exported accessor; running package
        // code is covered by the contract of `open`.
        let accessor: libloading::Symbol<'_, ManifestFn> =
            unsafe { self.library.get(MANIFEST_SYMBOL) }.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Package,
                    format!(
                        "module package '{}' exports no manifest",
                        self.path.display()
                    ),
                    e,
                )
            })?;

        let manifest = unsafe { accessor() };
        if manifest.is_null() {
            return Err(AppError::package(format!(
                "module package '{}' returned a null manifest",
                self.path.display()
            )));
        }

        // SAFETY: the manifest is a static inside the library, which `self`
        // keeps mapped for at least the lifetime of the returned reference.
        Ok(unsafe { &*manifest })
    }

    /// Path of the package this context was opened for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle to the mapped library.
    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }
}

impl std::fmt::Debug for LoadingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingContext")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
