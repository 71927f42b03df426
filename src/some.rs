use crate::equality::Comparand;
use crate::error::Result;
use crate::iter::Iter;
use crate::maybe::Maybe;
use crate::none::NONE;
use crate::optional::Optional;

/// An immutable holder of exactly one present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SomeValue<T> {
    value: T,
}

impl<T> SomeValue<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the contained value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<SomeValue<T>> for Maybe<T> {
    fn from(some: SomeValue<T>) -> Self {
        Maybe::Some(some)
    }
}

impl<T> Optional<T> for SomeValue<T> {
    fn is_some(&self) -> bool {
        true
    }

    fn unwrap(self) -> Result<T> {
        Ok(self.value)
    }

    fn unwrap_or(self, _default: T) -> T {
        self.value
    }

    fn unwrap_or_else<F>(self, _f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value
    }

    fn try_unwrap(self) -> Option<T> {
        Some(self.value)
    }

    fn some_then<F>(&self, callback: F)
    where
        F: FnOnce(&T),
    {
        callback(&self.value);
    }

    fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe::Some(SomeValue::new(f(self.value)))
    }

    fn map_or<U, F>(self, _default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(self.value)
    }

    fn map_or_else<U, D, F>(self, _default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        f(self.value)
    }

    fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        other
    }

    fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        f(self.value)
    }

    fn or(self, _other: Maybe<T>) -> Maybe<T> {
        Maybe::Some(self)
    }

    fn or_else<F>(self, _f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        Maybe::Some(self)
    }

    fn xor(self, other: Maybe<T>) -> Maybe<T> {
        if other.is_some() {
            Maybe::None(NONE)
        } else {
            Maybe::Some(self)
        }
    }

    fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.value) {
            Maybe::Some(self)
        } else {
            Maybe::None(NONE)
        }
    }

    fn equals<'a, C>(&self, other: C) -> bool
    where
        C: Into<Comparand<'a, T>>,
        T: PartialEq + 'a,
    {
        let other: Comparand<'a, T> = other.into();
        match other.payload() {
            Some(value) => self.value == *value,
            None => false,
        }
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter::once(&self.value)
    }
}
