//! Optional - An explicit zero-or-one value container
//!
//! An `Optional` either holds exactly one value, or holds nothing. Absence is
//! never implied by a sentinel hidden inside the value: it is a distinct state
//! that every chain has to account for.
//!
//! Values are immutable. Every operation that changes the logical content
//! consumes the container and returns a new one, and the chaining operations
//! (`map`, `map_nullable`, `flat_map`) short-circuit: once a chain is absent,
//! no further closure is invoked.

use std::any::type_name;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::OptionalError;

/// A container holding zero or one value of type `T`.
///
/// Nullable inputs are modelled as `Option<T>`, where `None` stands for null.
/// A bare `T` can never be null, so `Present` always holds a real value.
///
/// Equality is by value only: all `Absent` values are equal, and two `Present`
/// values are equal when their contents are.
///
/// # Examples
/// ```
/// use optionals::Optional;
///
/// let street: Optional<&str> = Optional::present(("Street1", 55))
///     .map(|(street, _number)| street);
/// assert_eq!(street, Optional::present("Street1"));
///
/// // Nothing after an absent step is evaluated.
/// let missing: Optional<u32> = Optional::<&str>::empty()
///     .map(|_| unreachable!());
/// assert!(missing.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// Holds nothing.
    Absent,
    /// Holds exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    /// Wrap a nullable value, requiring it to be non-null.
    ///
    /// Returns [`OptionalError::NullValue`] when given `None`. This never
    /// silently produces an absent container; use [`Optional::of_nullable`]
    /// when absence is acceptable.
    ///
    /// ```
    /// use optionals::{Optional, OptionalError};
    ///
    /// assert_eq!(Optional::of(Some(3)), Ok(Optional::present(3)));
    /// assert_eq!(Optional::<u8>::of(None), Err(OptionalError::NullValue));
    /// ```
    pub fn of(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(v) => Ok(Optional::Present(v)),
            None => {
                tracing::trace!(
                    ty = type_name::<T>(),
                    "strict constructor rejected a null value"
                );
                Err(OptionalError::NullValue)
            }
        }
    }

    /// Wrap a value that is statically known to exist.
    #[inline]
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Wrap a nullable value: `Some` becomes present, `None` becomes absent.
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }

    /// The absent container.
    #[inline]
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(*self, Optional::Present(_))
    }

    /// Returns `true` if nothing is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(*self, Optional::Absent)
    }

    /// Borrow the content, producing an `Optional<&T>`.
    ///
    /// This is what lets a chain walk through a record without taking it
    /// apart.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Optional::Present(ref v) => Optional::Present(v),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Take the held value, failing with [`OptionalError::EmptyValue`] when
    /// absent.
    ///
    /// Only use this where absence is already known to be impossible. The
    /// fallback and chaining operations are the normal way out of a
    /// container.
    pub fn get(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Absent => {
                tracing::trace!(ty = type_name::<T>(), "get called on an absent value");
                Err(OptionalError::EmptyValue)
            }
        }
    }

    /// Take the held value, or `default` when absent.
    ///
    /// `default` is already evaluated by the time this is called. Any side
    /// effect in the argument expression happens even when a value is present
    /// and `default` is thrown away. Use [`Optional::unwrap_or_else`] when the
    /// fallback is expensive or has side effects.
    ///
    /// ```
    /// use optionals::Optional;
    ///
    /// let mut calls = 0;
    /// let mut fallback = || {
    ///     calls += 1;
    ///     "fallback"
    /// };
    /// assert_eq!(Optional::present("value").unwrap_or(fallback()), "value");
    /// assert_eq!(calls, 1);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => default,
        }
    }

    /// Take the held value, or call `supplier` when absent.
    ///
    /// `supplier` runs if and only if the container is absent.
    ///
    /// ```
    /// use optionals::Optional;
    ///
    /// let mut calls = 0;
    /// let value = Optional::present("value").unwrap_or_else(|| {
    ///     calls += 1;
    ///     "fallback"
    /// });
    /// assert_eq!(value, "value");
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Absent => supplier(),
        }
    }

    /// Apply `f` to the held value, wrapping the result as present.
    ///
    /// `f` is never called on an absent container.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(v) => Optional::Present(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Apply `f` to the held value, where `f` may produce null.
    ///
    /// A `None` result becomes an absent container. `f` is never called on
    /// an absent container.
    ///
    /// ```
    /// use optionals::Optional;
    ///
    /// let words = Optional::present("");
    /// assert!(words.map_nullable(|w| w.chars().next()).is_empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Present(v) => Optional::of_nullable(f(v)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Apply `f`, which itself returns an `Optional`, without nesting the
    /// result.
    ///
    /// Use this to compose with accessors that already return an `Optional`.
    /// `f` is never called on an absent container.
    #[doc(alias = "and_then")]
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keep the held value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) => {
                if predicate(&v) {
                    Optional::Present(v)
                } else {
                    Optional::Absent
                }
            }
            Optional::Absent => Optional::Absent,
        }
    }

    /// Call `consumer` with the held value, if any.
    #[inline]
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Optional::Present(v) = self {
            consumer(v)
        }
    }

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => other,
        }
    }

    /// Convert to a `Result`, using `err` for the absent case.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Absent => Err(err),
        }
    }

    /// Leave the container model, back to a plain nullable value.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }

    /// Iterate over the held value, yielding at most one item.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(v) => serializer.serialize_some(v),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::of_nullable)
    }
}
