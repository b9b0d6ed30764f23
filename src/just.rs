use std::borrow::{Borrow, BorrowMut};
use std::ops::{Deref, DerefMut};

use crate::Optional;

/// a value on its way into an [`Optional`]
///
/// `Optional<T>` implements both `From<Just<T>>` and `From<Nothing>`, which stay distinct even
/// when `T` is [`Nothing`](crate::Nothing), so `Just(x).into()` and `Nothing.into()` are never
/// ambiguous
///
/// generic code can keep treating a `Just<T>` as a `T`: it derefs to it, borrows as it and
/// gives it back with [`Just::into_inner`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Just<T>(pub T);

impl<T> Just<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }
    /// builds the value from anything losslessly convertible into `T`
    #[inline]
    pub fn from_value<U: Into<T>>(value: U) -> Self {
        Self(value.into())
    }
    /// builds the value from `value` with a checked conversion
    #[inline]
    pub fn try_from_value<U>(value: U) -> Result<Self, T::Error>
    where
        T: TryFrom<U>,
    {
        T::try_from(value).map(Self)
    }
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
    #[inline]
    pub fn into_optional(self) -> Optional<T> {
        Optional::Present(self.0)
    }
}

impl<T> From<T> for Just<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> From<Just<T>> for Optional<T> {
    #[inline]
    fn from(value: Just<T>) -> Self {
        value.into_optional()
    }
}

impl<T> Deref for Just<T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Just<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Just<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Just<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Borrow<T> for Just<T> {
    #[inline]
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T> BorrowMut<T> for Just<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
