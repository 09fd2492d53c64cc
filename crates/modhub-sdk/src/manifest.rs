//! Package manifest definitions.
//!
//! Defines the interface that module packages must export: a single
//! well-known symbol returning a [`PackageManifest`] describing every
//! constructible type the package contains.

use std::ffi::c_void;

/// Name of the manifest accessor symbol every module package exports.
pub const MANIFEST_SYMBOL: &[u8] = b"modhub_package_manifest";

/// Type of the manifest accessor function exported by module packages.
///
/// Module packages must export: `extern "C" fn modhub_package_manifest() ->
/// *const PackageManifest`. The [`export_package!`](crate::export_package)
/// macro generates it.
pub type ManifestFn = unsafe extern "C" fn() -> *const PackageManifest;

/// One constructible type exported by a module package.
#[derive(Debug)]
pub struct TypeEntry {
    /// Name of the concrete type, as declared in the package.
    pub type_name: &'static str,
    /// Name of the capability contract the type implements.
    pub contract: &'static str,
    /// Zero-argument constructor.
    ///
    /// Returns a `Box<Box<T>>` (where `T` is the contract's instance type)
    /// through `Box::into_raw`, or null when construction fails. The
    /// generated constructor traps panics, so it never unwinds across the
    /// package boundary.
    pub construct: unsafe extern "C" fn() -> *mut c_void,
}

/// Contents of a module package: the build fingerprint plus the ordered
/// list of exported type entries.
#[derive(Debug)]
pub struct PackageManifest {
    /// [`SDK_VERSION`](crate::SDK_VERSION) the package was built against.
    pub sdk_version: &'static str,
    /// [`RUSTC_VERSION`](crate::RUSTC_VERSION) the package was built with.
    pub rustc_version: &'static str,
    /// Exported type entries, in declaration order.
    pub entries: &'static [TypeEntry],
}

impl PackageManifest {
    /// Checks that the package was built against the same SDK and compiler
    /// as the host.
    ///
    /// Entries of a package that fails this check must not be resolved or
    /// constructed; no Rust type may cross the boundary on a mismatch.
    pub fn verify_host_compat(&self) -> Result<(), VersionMismatch> {
        if self.sdk_version != crate::SDK_VERSION {
            return Err(VersionMismatch::Sdk {
                package: self.sdk_version.to_string(),
                host: crate::SDK_VERSION.to_string(),
            });
        }
        if self.rustc_version != crate::RUSTC_VERSION {
            return Err(VersionMismatch::Rustc {
                package: self.rustc_version.to_string(),
                host: crate::RUSTC_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

/// Why a package's entries cannot be resolved by this host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionMismatch {
    /// The package was built against a different SDK version.
    #[error("package built against SDK {package}, host uses SDK {host}")]
    Sdk {
        /// SDK version recorded in the package manifest.
        package: String,
        /// SDK version of this host.
        host: String,
    },
    /// The package was built with a different Rust toolchain.
    #[error("package built with rustc {package}, host built with rustc {host}")]
    Rustc {
        /// Compiler version recorded in the package manifest.
        package: String,
        /// Compiler version of this host.
        host: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn never_constructs() -> *mut c_void {
        std::ptr::null_mut()
    }

    static ENTRIES: &[TypeEntry] = &[TypeEntry {
        type_name: "Widget",
        contract: "test.widget",
        construct: never_constructs,
    }];

    #[test]
    fn test_same_versions_are_compatible() {
        let manifest = PackageManifest {
            sdk_version: crate::SDK_VERSION,
            rustc_version: crate::RUSTC_VERSION,
            entries: ENTRIES,
        };
        assert!(manifest.verify_host_compat().is_ok());
    }

    #[test]
    fn test_sdk_mismatch_is_rejected() {
        let manifest = PackageManifest {
            sdk_version: "0.0.0-other",
            rustc_version: crate::RUSTC_VERSION,
            entries: ENTRIES,
        };
        match manifest.verify_host_compat() {
            Err(VersionMismatch::Sdk { package, host }) => {
                assert_eq!(package, "0.0.0-other");
                assert_eq!(host, crate::SDK_VERSION);
            }
            other => panic!("expected SDK mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_rustc_mismatch_is_rejected() {
        let manifest = PackageManifest {
            sdk_version: crate::SDK_VERSION,
            rustc_version: "1.0.0",
            entries: ENTRIES,
        };
        assert!(matches!(
            manifest.verify_host_compat(),
            Err(VersionMismatch::Rustc { .. })
        ));
    }
}
