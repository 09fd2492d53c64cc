//! Sample module package exporting two [`Greeter`] implementations.
//!
//! Build as a `cdylib` and drop the resulting shared library into the host's
//! module directory; discovery of the greeter contract then yields one
//! instance of each type below, in declaration order.

use greeter_api::{GREETER, Greeter};

/// Plain English greeter.
#[derive(Debug, Default)]
pub struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn name(&self) -> &'static str {
        "english"
    }

    fn greet(&self, who: &str) -> String {
        format!("Hello, {who}!")
    }
}

/// Greeter that shouts.
#[derive(Debug, Default)]
pub struct ShoutingGreeter;

impl Greeter for ShoutingGreeter {
    fn name(&self) -> &'static str {
        "shouting"
    }

    fn greet(&self, who: &str) -> String {
        format!("HELLO, {}!", who.to_uppercase())
    }
}

modhub_sdk::export_package! {
    EnglishGreeter as dyn Greeter => GREETER,
    ShoutingGreeter as dyn Greeter => GREETER,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lists_both_greeters_in_order() {
        let manifest = unsafe { &*modhub_package_manifest() };

        let names: Vec<_> = manifest.entries.iter().map(|e| e.type_name).collect();
        assert_eq!(names, ["EnglishGreeter", "ShoutingGreeter"]);
        assert!(manifest.entries.iter().all(|e| e.contract == GREETER.name()));
    }

    #[test]
    fn test_constructed_greeters_greet() {
        let manifest = unsafe { &*modhub_package_manifest() };

        let raw = unsafe { (manifest.entries[0].construct)() };
        assert!(!raw.is_null());
        let english = unsafe { *Box::from_raw(raw.cast::<Box<dyn Greeter>>()) };
        assert_eq!(english.greet("world"), "Hello, world!");

        let raw = unsafe { (manifest.entries[1].construct)() };
        assert!(!raw.is_null());
        let shouting = unsafe { *Box::from_raw(raw.cast::<Box<dyn Greeter>>()) };
        assert_eq!(shouting.greet("world"), "HELLO, WORLD!");
    }
}
