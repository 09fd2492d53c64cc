//! Sample capability contract: greeting providers.
//!
//! Linked by both the host and greeting module packages, so the trait and
//! its token mean the same thing on both sides of the package boundary.

use modhub_sdk::Contract;

/// Contract implemented by greeting modules.
pub trait Greeter: Send {
    /// Short identifier of this greeter.
    fn name(&self) -> &'static str;

    /// Produces a greeting for `who`.
    fn greet(&self, who: &str) -> String;
}

/// Token for discovering [`Greeter`] implementations.
pub const GREETER: Contract<dyn Greeter> = Contract::new("modhub.greeter");
