use std::fmt;

use crate::equality::Comparand;
use crate::error::Result;
use crate::iter::{IntoIter, Iter};
use crate::none::{NoneValue, NONE};
use crate::optional::Optional;
use crate::some::SomeValue;

/// Either a present value or its absence.
///
/// The variant is fixed at construction. Every combinator returns a new
/// `Maybe`; use [`Maybe::as_ref`] to run one without giving up the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    None(NoneValue),
    Some(SomeValue<T>),
}

impl<T> Maybe<T> {
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(some) => Maybe::Some(SomeValue::new(some.get())),
            Maybe::None(_) => Maybe::None(NONE),
        }
    }

    /// Returns the contained value, panicking with `msg` if there is none.
    ///
    /// For callers that treat an absent value as a programming error.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}: {}", msg, e),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Converts into the standard library option.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None(NONE)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(SomeValue::new(value)),
            None => Maybe::None(NONE),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.try_unwrap()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(some) => f.debug_tuple("Some").field(some.get()).finish(),
            Maybe::None(_) => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(some) => write!(f, "Some({})", some.get()),
            Maybe::None(_) => write!(f, "None"),
        }
    }
}

impl<T> Optional<T> for Maybe<T> {
    fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    fn unwrap(self) -> Result<T> {
        match self {
            Maybe::Some(some) => some.unwrap(),
            Maybe::None(none) => none.unwrap(),
        }
    }

    fn unwrap_unchecked(self) -> Result<T> {
        match self {
            Maybe::Some(some) => some.unwrap_unchecked(),
            Maybe::None(none) => none.unwrap_unchecked(),
        }
    }

    fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(some) => some.unwrap_or(default),
            Maybe::None(none) => none.unwrap_or(default),
        }
    }

    fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(some) => some.unwrap_or_else(f),
            Maybe::None(none) => none.unwrap_or_else(f),
        }
    }

    fn try_unwrap(self) -> Option<T> {
        match self {
            Maybe::Some(some) => some.try_unwrap(),
            Maybe::None(none) => none.try_unwrap(),
        }
    }

    fn some_then<F>(&self, callback: F)
    where
        F: FnOnce(&T),
    {
        match self {
            Maybe::Some(some) => some.some_then(callback),
            Maybe::None(none) => Optional::<T>::some_then(none, callback),
        }
    }

    fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(some) => some.map(f),
            Maybe::None(none) => Optional::<T>::map(none, f),
        }
    }

    fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(some) => some.map_or(default, f),
            Maybe::None(none) => Optional::<T>::map_or(none, default, f),
        }
    }

    fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(some) => some.map_or_else(default, f),
            Maybe::None(none) => Optional::<T>::map_or_else(none, default, f),
        }
    }

    fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(some) => some.and(other),
            Maybe::None(none) => Optional::<T>::and(none, other),
        }
    }

    fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(some) => some.and_then(f),
            Maybe::None(none) => Optional::<T>::and_then(none, f),
        }
    }

    fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(some) => some.or(other),
            Maybe::None(none) => none.or(other),
        }
    }

    fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(some) => some.or_else(f),
            Maybe::None(none) => none.or_else(f),
        }
    }

    fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(some) => some.xor(other),
            Maybe::None(none) => none.xor(other),
        }
    }

    fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(some) => some.filter(predicate),
            Maybe::None(none) => none.filter(predicate),
        }
    }

    fn equals<'a, C>(&self, other: C) -> bool
    where
        C: Into<Comparand<'a, T>>,
        T: PartialEq + 'a,
    {
        match self {
            Maybe::Some(some) => some.equals(other),
            Maybe::None(none) => Optional::<T>::equals(none, other),
        }
    }

    fn iter(&self) -> Iter<'_, T> {
        match self {
            Maybe::Some(some) => some.iter(),
            Maybe::None(none) => Optional::<T>::iter(none),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.try_unwrap())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
