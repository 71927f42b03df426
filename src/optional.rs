//! # Optional Capability
//!
//! The contract every optional value honors, whichever variant it is.
//!
//! Both leaf variants ([`SomeValue`](crate::SomeValue) and
//! [`NoneValue`](crate::NoneValue)) implement [`Optional`], and so does the
//! [`Maybe`] sum type that client code normally holds. Results of the
//! combinators are always new [`Maybe`] values; nothing is mutated in place.
//!
//! ## Eager and lazy fallbacks
//!
//! Operations come in pairs where a fallback is involved:
//!
//! | eager          | lazy                |
//! |----------------|---------------------|
//! | `unwrap_or`    | `unwrap_or_else`    |
//! | `map_or`       | `map_or_else`       |
//! | `and`          | `and_then`          |
//! | `or`           | `or_else`           |
//!
//! Eager arguments are evaluated by the caller before the call. Lazy ones are
//! closures invoked at most once, and only on the branch that needs them.

use crate::equality::Comparand;
use crate::error::Result;
use crate::iter::Iter;
use crate::maybe::Maybe;

/// Capability interface shared by `Some` and `None`.
pub trait Optional<T>: Sized {
    /// Returns `true` if a value is present.
    fn is_some(&self) -> bool;

    /// Returns `true` if no value is present.
    fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the contained value.
    ///
    /// Fails with [`OptionError::EmptyValueAccess`](crate::OptionError::EmptyValueAccess)
    /// on `None`.
    fn unwrap(self) -> Result<T>;

    /// Same contract as [`Optional::unwrap`]; the name only documents intent at
    /// the call site. `None` is still checked.
    fn unwrap_unchecked(self) -> Result<T> {
        self.unwrap()
    }

    /// Returns the contained value or `default`.
    fn unwrap_or(self, default: T) -> T;

    /// Returns the contained value or computes one from `f`.
    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T;

    /// Returns the contained value, or `None` as the absent marker.
    fn try_unwrap(self) -> Option<T>;

    /// Calls `callback` with the contained value, if any.
    fn some_then<F>(&self, callback: F)
    where
        F: FnOnce(&T);

    /// Maps the contained value with `f`.
    fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U;

    /// Applies `f` to the contained value, or returns `default`.
    fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U;

    /// Applies `f` to the contained value, or computes a fallback with `default`.
    fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U;

    /// Returns `other` if a value is present, otherwise `None`.
    fn and<U>(self, other: Maybe<U>) -> Maybe<U>;

    /// Calls `f` with the contained value and returns its result, otherwise `None`.
    ///
    /// Some languages call this operation flatmap.
    fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>;

    /// Returns `self` if a value is present, otherwise `other`.
    fn or(self, other: Maybe<T>) -> Maybe<T>;

    /// Returns `self` if a value is present, otherwise calls `f`.
    fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>;

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    fn xor(self, other: Maybe<T>) -> Maybe<T>;

    /// Keeps the contained value only if `predicate` accepts it.
    fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool;

    /// Structural equality against another option or a bare value.
    fn equals<'a, C>(&self, other: C) -> bool
    where
        C: Into<Comparand<'a, T>>,
        T: PartialEq + 'a;

    /// Compares against a bare, unwrapped value.
    fn equals_value(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.equals(Comparand::Value(other))
    }

    /// Returns a fresh sequence over the contained value.
    fn iter(&self) -> Iter<'_, T>;
}
