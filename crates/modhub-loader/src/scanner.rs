//! Contract scanning of package manifests.
//!
//! Pure discovery step: finds the entries of one package that satisfy a
//! capability contract. No instantiation happens here; constructing
//! instances is the loader's concern, which keeps "find" and "construct"
//! separable and independently testable.

use tracing::trace;

use modhub_sdk::{Contract, PackageManifest, TypeEntry, VersionMismatch};

/// Returns the entries of `manifest` assignable to `contract`, in manifest
/// order.
///
/// Resolution runs first: a package recorded against a different SDK or
/// compiler cannot have its entries resolved safely, so the whole package is
/// rejected. Scanning never stops at the first match: one package may
/// legitimately export several implementations of the same contract, and all
/// of them are returned.
pub fn scan<'a, T: ?Sized>(
    manifest: &'a PackageManifest,
    contract: &Contract<T>,
) -> Result<Vec<&'a TypeEntry>, VersionMismatch> {
    manifest.verify_host_compat()?;

    let matched: Vec<&TypeEntry> = manifest
        .entries
        .iter()
        .filter(|entry| entry.contract == contract.name())
        .collect();

    trace!(
        contract = contract.name(),
        entries = manifest.entries.len(),
        matched = matched.len(),
        "package scanned"
    );

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;

    use modhub_sdk::{RUSTC_VERSION, SDK_VERSION};

    trait Marker {}

    const MARKED: Contract<dyn Marker> = Contract::new("test.marker");

    unsafe extern "C" fn never_constructs() -> *mut c_void {
        std::ptr::null_mut()
    }

    static ENTRIES: &[TypeEntry] = &[
        TypeEntry {
            type_name: "Alpha",
            contract: "test.marker",
            construct: never_constructs,
        },
        TypeEntry {
            type_name: "Beta",
            contract: "test.other",
            construct: never_constructs,
        },
        TypeEntry {
            type_name: "Gamma",
            contract: "test.marker",
            construct: never_constructs,
        },
    ];

    fn compatible_manifest() -> PackageManifest {
        PackageManifest {
            sdk_version: SDK_VERSION,
            rustc_version: RUSTC_VERSION,
            entries: ENTRIES,
        }
    }

    #[test]
    fn test_all_matches_returned_in_entry_order() {
        let manifest = compatible_manifest();
        let matched = scan(&manifest, &MARKED).unwrap();

        let names: Vec<_> = matched.iter().map(|e| e.type_name).collect();
        assert_eq!(names, ["Alpha", "Gamma"]);
    }

    #[test]
    fn test_foreign_contract_entries_never_match() {
        let manifest = compatible_manifest();
        let matched = scan(&manifest, &MARKED).unwrap();

        assert!(matched.iter().all(|e| e.type_name != "Beta"));
    }

    #[test]
    fn test_no_matches_is_empty_not_an_error() {
        let manifest = compatible_manifest();
        let unknown: Contract<dyn Marker> = Contract::new("test.unknown");

        assert!(scan(&manifest, &unknown).unwrap().is_empty());
    }

    #[test]
    fn test_incompatible_package_is_rejected_before_matching() {
        let manifest = PackageManifest {
            sdk_version: "0.0.0-other",
            rustc_version: RUSTC_VERSION,
            entries: ENTRIES,
        };

        assert!(matches!(
            scan(&manifest, &MARKED),
            Err(VersionMismatch::Sdk { .. })
        ));
    }
}
