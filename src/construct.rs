use crate::maybe::Maybe;
use crate::none::NONE;
use crate::some::SomeValue;

/// Wraps a present value.
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(SomeValue::new(value))
}

/// The absent value.
pub fn none<T>() -> Maybe<T> {
    Maybe::None(NONE)
}

/// `None` when `value` equals `sentinel`, otherwise `Some(value)`.
///
/// ```
/// use optio::{from_nullable, Optional};
///
/// assert!(from_nullable(-1, &-1).is_none());
/// assert!(from_nullable(0, &-1).is_some());
/// ```
pub fn from_nullable<T: PartialEq>(value: T, sentinel: &T) -> Maybe<T> {
    if value == *sentinel {
        none()
    } else {
        some(value)
    }
}

/// Lifts a standard `Option`, treating `None` as the null sentinel.
pub fn from_option<T>(value: Option<T>) -> Maybe<T> {
    value.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::Optional;

    #[test]
    fn test_from_nullable_with_sentinel() {
        assert!(from_nullable("", &"").is_none());
        assert!(from_nullable("x", &"").equals_value(&"x"));
    }

    #[test]
    fn test_from_option_default_sentinel() {
        assert!(from_option(Some(1)).is_some());
        assert!(from_option::<i32>(None).is_none());
        // A sentinel other than null keeps null-like payloads present.
        assert!(from_nullable(None, &Some(1)).is_some());
    }
}
