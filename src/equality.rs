use crate::maybe::Maybe;
use crate::none::NoneValue;
use crate::some::SomeValue;

/// Right-hand side of [`Optional::equals`](crate::Optional::equals).
///
/// Either another option, or a bare value compared against the payload.
#[derive(Debug)]
pub enum Comparand<'a, T> {
    Option(&'a Maybe<T>),
    Some(&'a SomeValue<T>),
    None,
    Value(&'a T),
}

// Manual impls: a derive would require `T: Clone`/`T: Copy`.
impl<T> Clone for Comparand<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Comparand<'_, T> {}

impl<'a, T> Comparand<'a, T> {
    /// The payload on the right-hand side, if it has one.
    pub(crate) fn payload(self) -> Option<&'a T> {
        match self {
            Comparand::Option(Maybe::Some(some)) => Some(some.get()),
            Comparand::Option(Maybe::None(_)) => None,
            Comparand::Some(some) => Some(some.get()),
            Comparand::None => None,
            Comparand::Value(value) => Some(value),
        }
    }

    /// Whether the right-hand side is an option in the `None` state.
    pub(crate) fn is_none_option(self) -> bool {
        matches!(self, Comparand::Option(Maybe::None(_)) | Comparand::None)
    }
}

impl<'a, T> From<&'a Maybe<T>> for Comparand<'a, T> {
    fn from(option: &'a Maybe<T>) -> Self {
        Comparand::Option(option)
    }
}

impl<'a, T> From<&'a SomeValue<T>> for Comparand<'a, T> {
    fn from(some: &'a SomeValue<T>) -> Self {
        Comparand::Some(some)
    }
}

impl<T> From<&NoneValue> for Comparand<'_, T> {
    fn from(_: &NoneValue) -> Self {
        Comparand::None
    }
}

impl<T> From<NoneValue> for Comparand<'_, T> {
    fn from(_: NoneValue) -> Self {
        Comparand::None
    }
}
