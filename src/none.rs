use crate::equality::Comparand;
use crate::error::{OptionError, Result};
use crate::iter::Iter;
use crate::maybe::Maybe;
use crate::optional::Optional;

/// The absence of a value. Carries no state; every instance behaves the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoneValue;

/// Canonical `None` instance.
pub const NONE: NoneValue = NoneValue;

impl<T> From<NoneValue> for Maybe<T> {
    fn from(none: NoneValue) -> Self {
        Maybe::None(none)
    }
}

impl<T> Optional<T> for NoneValue {
    fn is_some(&self) -> bool {
        false
    }

    fn unwrap(self) -> Result<T> {
        tracing::debug!(op = "unwrap", "attempted to access the none value");
        Err(OptionError::EmptyValueAccess)
    }

    fn unwrap_unchecked(self) -> Result<T> {
        tracing::debug!(op = "unwrap_unchecked", "attempted to access the none value");
        Err(OptionError::EmptyValueAccess)
    }

    fn unwrap_or(self, default: T) -> T {
        default
    }

    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        f()
    }

    fn try_unwrap(self) -> Option<T> {
        None
    }

    fn some_then<F>(&self, _callback: F)
    where
        F: FnOnce(&T),
    {
    }

    fn map<U, F>(self, _f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe::None(self)
    }

    fn map_or<U, F>(self, default: U, _f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        default
    }

    fn map_or_else<U, D, F>(self, default: D, _f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        default()
    }

    fn and<U>(self, _other: Maybe<U>) -> Maybe<U> {
        Maybe::None(self)
    }

    fn and_then<U, F>(self, _f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        Maybe::None(self)
    }

    fn or(self, other: Maybe<T>) -> Maybe<T> {
        other
    }

    fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        f()
    }

    fn xor(self, other: Maybe<T>) -> Maybe<T> {
        other
    }

    fn filter<P>(self, _predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        Maybe::None(self)
    }

    fn equals<'a, C>(&self, other: C) -> bool
    where
        C: Into<Comparand<'a, T>>,
        T: PartialEq + 'a,
    {
        let other: Comparand<'a, T> = other.into();
        other.is_none_option()
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_fails() {
        let result: Result<i32> = NONE.unwrap();
        assert_eq!(result, Err(OptionError::EmptyValueAccess));
        let result: Result<i32> = NONE.unwrap_unchecked();
        assert_eq!(result, Err(OptionError::EmptyValueAccess));
    }

    #[test]
    fn test_callbacks_never_invoked() {
        let mapped: Maybe<i32> = Optional::<i32>::map(NONE, |_| panic!("map called on none"));
        assert!(mapped.is_none());

        let filtered: Maybe<i32> = NONE.filter(|_: &i32| panic!("predicate called on none"));
        assert!(filtered.is_none());

        let bound: Maybe<i32> =
            Optional::<i32>::and_then(NONE, |_| -> Maybe<i32> { panic!("bind called on none") });
        assert!(bound.is_none());

        Optional::<i32>::some_then(&NONE, |_| panic!("callback called on none"));
    }

    #[test]
    fn test_fresh_instances_are_indistinguishable() {
        assert_eq!(NoneValue, NONE);
        assert_eq!(NoneValue::default(), NONE);
        assert!(Optional::<i32>::equals(&NoneValue, NONE));
    }

    #[test]
    fn test_iter_is_empty() {
        assert_eq!(Optional::<i32>::iter(&NONE).count(), 0);
    }
}
