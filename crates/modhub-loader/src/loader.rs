//! End-to-end module discovery for one module directory.

use std::env::consts::DLL_EXTENSION;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use modhub_core::config::modules::ModulesConfig;
use modhub_core::error::AppError;
use modhub_sdk::{Contract, TypeEntry};

use crate::context::LoadingContext;
use crate::diagnostics::Diagnostic;
use crate::handle::ModuleHandle;
use crate::scanner;

/// Result of one discovery pass: the constructed instances plus the
/// non-fatal failures encountered along the way.
pub struct Discovery<T: ?Sized> {
    /// Instances in (directory-listing, manifest-entry) order.
    pub modules: Vec<ModuleHandle<T>>,
    /// Reported non-fatal failures.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T: ?Sized> std::fmt::Debug for Discovery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discovery")
            .field("modules", &self.modules.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Discovers and instantiates module implementations of a capability
/// contract from a directory of module packages.
///
/// The loader holds only the directory path; every
/// [`discover`](Self::discover) call is self-contained and retains nothing
/// after it returns.
#[derive(Debug, Clone)]
pub struct ModuleLoader {
    directory: PathBuf,
}

impl ModuleLoader {
    /// Creates a loader for the given module directory.
    ///
    /// The directory is validated when discovery runs, not here.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Creates a loader from the `[modules]` configuration section.
    pub fn from_config(config: &ModulesConfig) -> Self {
        Self::new(&config.directory)
    }

    /// The configured module directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Runs one discovery pass for `contract`.
    ///
    /// Candidates (files directly inside the module directory with the
    /// platform shared-library extension) are processed strictly
    /// sequentially in directory-listing order, each in a fresh
    /// [`LoadingContext`] that is released before the next candidate.
    /// Within a candidate, matched entries are instantiated in manifest
    /// order, so the returned instances preserve the composite
    /// (candidate, entry) order.
    ///
    /// Failures split three ways:
    ///
    /// - a missing or non-directory module path fails immediately with a
    ///   [`Configuration`](modhub_core::error::ErrorKind::Configuration)
    ///   error, before any candidate is touched;
    /// - a candidate that cannot be opened as a module package (unreadable
    ///   library, missing manifest) fails the whole call with a
    ///   [`Package`](modhub_core::error::ErrorKind::Package) error;
    /// - an incompatible package or a failing constructor is recorded as a
    ///   [`Diagnostic`] and never aborts the rest of the pass.
    ///
    /// An empty directory is not an error: the result just has no modules.
    ///
    /// # Safety
    ///
    /// Executes code from every package in the directory. Every package must
    /// be a trusted ModHub module package built against the same SDK and
    /// contract crates as this host.
    pub unsafe fn discover<T: ?Sized>(
        &self,
        contract: &Contract<T>,
    ) -> Result<Discovery<T>, AppError> {
        if !self.directory.is_dir() {
            return Err(AppError::configuration(format!(
                "invalid module directory: {}",
                self.directory.display()
            )));
        }

        info!(
            directory = %self.directory.display(),
            contract = contract.name(),
            "discovering modules"
        );

        let mut modules = Vec::new();
        let mut diagnostics = Vec::new();

        for dir_entry in std::fs::read_dir(&self.directory)? {
            let path = dir_entry?.path();
            if !path.is_file() || !has_package_extension(&path) {
                debug!(file = %path.display(), "skipping non-package entry");
                continue;
            }

            let context = unsafe { LoadingContext::open(&path) }?;
            match scanner::scan(context.manifest()?, contract) {
                Ok(matched) => {
                    for entry in matched {
                        match unsafe { instantiate(entry, &context) } {
                            Ok(handle) => modules.push(handle),
                            Err(diagnostic) => {
                                warn!(
                                    package = %path.display(),
                                    type_name = entry.type_name,
                                    "module instantiation failed"
                                );
                                diagnostics.push(diagnostic);
                            }
                        }
                    }
                }
                Err(mismatch) => {
                    warn!(
                        package = %path.display(),
                        %mismatch,
                        "module package incompatible with host"
                    );
                    diagnostics.push(Diagnostic::resolution(&path, mismatch.to_string()));
                }
            }
            // context drops here; a package that produced no instance is
            // unmapped before the next candidate is opened
        }

        info!(
            modules = modules.len(),
            diagnostics = diagnostics.len(),
            "module discovery complete"
        );

        Ok(Discovery {
            modules,
            diagnostics,
        })
    }
}

fn has_package_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(DLL_EXTENSION)
}

/// Invokes the entry's zero-argument constructor inside `context`.
unsafe fn instantiate<T: ?Sized>(
    entry: &TypeEntry,
    context: &LoadingContext,
) -> Result<ModuleHandle<T>, Diagnostic> {
    // SAFETY: the constructor was generated by `export_package!` against the
    // same SDK and compiler (verified during scanning) and traps its own
    // panics, returning null on failure.
    let raw = unsafe { (entry.construct)() };
    if raw.is_null() {
        return Err(Diagnostic::instantiation(
            context.path(),
            entry.type_name,
            "constructor failed",
        ));
    }

    // SAFETY: a non-null pointer from the constructor is a `Box<Box<T>>`
    // produced through `Box::into_raw`, and the contract name match pins `T`
    // to the instance type the entry was declared with.
    let instance = unsafe { *Box::from_raw(raw.cast::<Box<T>>()) };

    Ok(ModuleHandle::new(instance, context.library().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modhub_core::error::ErrorKind;

    trait Anything: Send {}

    const ANYTHING: Contract<dyn Anything> = Contract::new("test.anything");

    #[test]
    fn test_missing_directory_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        let loader = ModuleLoader::new(&missing);
        let err = unsafe { loader.discover(&ANYTHING) }.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("no-such-dir"));
    }

    #[test]
    fn test_plain_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("modules");
        std::fs::write(&file, b"not a directory").unwrap();

        let loader = ModuleLoader::new(&file);
        let err = unsafe { loader.discover(&ANYTHING) }.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_directory_discovers_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let loader = ModuleLoader::new(dir.path());
        let discovery = unsafe { loader.discover(&ANYTHING) }.unwrap();

        assert!(discovery.modules.is_empty());
        assert!(discovery.diagnostics.is_empty());
    }

    #[test]
    fn test_non_package_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("module.toml"), b"[package]").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let loader = ModuleLoader::new(dir.path());
        let discovery = unsafe { loader.discover(&ANYTHING) }.unwrap();

        assert!(discovery.modules.is_empty());
        assert!(discovery.diagnostics.is_empty());
    }

    #[test]
    fn test_unreadable_package_fails_the_call() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join(format!("bogus.{DLL_EXTENSION}"));
        std::fs::write(&bogus, b"this is not a shared library").unwrap();

        let loader = ModuleLoader::new(dir.path());
        let err = unsafe { loader.discover(&ANYTHING) }.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Package);
        assert!(err.message.contains("bogus"));
    }

    #[test]
    fn test_package_extension_filter() {
        assert!(has_package_extension(Path::new(
            &format!("/modules/real.{DLL_EXTENSION}")
        )));
        assert!(!has_package_extension(Path::new("/modules/readme.txt")));
        assert!(!has_package_extension(Path::new("/modules/noext")));
    }
}
