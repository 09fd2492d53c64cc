//! The `export_package!` macro module. The macro itself is exported at the
//! crate root.

/// Declares the manifest symbol for a module package.
///
/// Invoke once per package, at the crate root of a `cdylib` crate. Each line
/// couples one concrete type to the contract token it implements:
///
/// ```rust,ignore
/// use greeter_api::{Greeter, GREETER};
///
/// modhub_sdk::export_package! {
///     EnglishGreeter as dyn Greeter => GREETER,
///     ShoutingGreeter as dyn Greeter => GREETER,
/// }
/// ```
///
/// The declared type must implement [`Default`]; the token must be a
/// constant whose type parameter is the declared instance type (checked at
/// compile time). Entries keep their declaration order in the manifest.
///
/// The generated constructor traps panics and returns null instead, so a
/// failing constructor never unwinds across the package boundary.
#[macro_export]
macro_rules! export_package {
    ($( $ty:ty as $inst:ty => $contract:expr ),+ $(,)?) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn modhub_package_manifest() -> *const $crate::manifest::PackageManifest {
            static MANIFEST: $crate::manifest::PackageManifest =
                $crate::manifest::PackageManifest {
                    sdk_version: $crate::SDK_VERSION,
                    rustc_version: $crate::RUSTC_VERSION,
                    entries: &[
                        $(
                            $crate::manifest::TypeEntry {
                                type_name: ::core::stringify!($ty),
                                contract: {
                                    // binds the declared instance type to the
                                    // token's type parameter
                                    const TOKEN: $crate::contract::Contract<$inst> = $contract;
                                    TOKEN.name()
                                },
                                construct: {
                                    unsafe extern "C" fn construct() -> *mut ::core::ffi::c_void {
                                        match ::std::panic::catch_unwind(|| {
                                            ::std::boxed::Box::new(
                                                <$ty as ::core::default::Default>::default(),
                                            )
                                                as ::std::boxed::Box<$inst>
                                        }) {
                                            ::core::result::Result::Ok(instance) => {
                                                ::std::boxed::Box::into_raw(
                                                    ::std::boxed::Box::new(instance),
                                                )
                                                .cast()
                                            }
                                            ::core::result::Result::Err(_) => {
                                                ::core::ptr::null_mut()
                                            }
                                        }
                                    }
                                    construct
                                },
                            },
                        )+
                    ],
                };
            &MANIFEST
        }
    };
}
