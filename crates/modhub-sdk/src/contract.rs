//! Capability contract tokens.

use std::fmt;
use std::marker::PhantomData;

/// Type token identifying a capability contract.
///
/// `T` is the instance type a matching module entry constructs, normally a
/// `dyn Trait` object type. The name is the contract's stable identity across
/// the package boundary: a package entry matches a token when it declares the
/// same name, and the token's type parameter fixes what the host casts the
/// constructed instance to.
///
/// Tokens are declared as constants next to the contract trait:
///
/// ```rust,ignore
/// pub trait Greeter: Send {
///     fn greet(&self, who: &str) -> String;
/// }
///
/// pub const GREETER: Contract<dyn Greeter> = Contract::new("modhub.greeter");
/// ```
pub struct Contract<T: ?Sized> {
    name: &'static str,
    _instance: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Contract<T> {
    /// Creates a token for the contract identified by `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _instance: PhantomData,
        }
    }

    /// The contract's stable name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> Clone for Contract<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Contract<T> {}

impl<T: ?Sized> fmt::Debug for Contract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker {}

    #[test]
    fn test_name_round_trip() {
        const TOKEN: Contract<dyn Marker> = Contract::new("test.marker");
        assert_eq!(TOKEN.name(), "test.marker");
    }
}
