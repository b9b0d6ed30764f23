mod cmp;
mod convert;
pub mod display;
mod error;
mod impls;
pub mod iter;
mod just;
pub mod report;
pub mod serde;

pub use error::Error;
pub use just::Just;

pub mod prelude {
    pub use crate::Optional::{Absent, Present};
    pub use crate::{none, some, Just, Nothing, OptionExt, Optional};
}

/// a unit struct that represents absence
///
/// comparing an [`Optional`] against it never touches the contained value, and assigning it
/// (through [`Optional::set`] or [`From`]) drops whatever value was held
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing;

/// a value that is either [`Present`](Optional::Present) or [`Absent`](Optional::Absent)
///
/// the layout is the one the compiler picks for [`Option`], so `Optional<T>` is exactly as big as
/// `Option<T>`, and it is [`Copy`] (or [`Clone`]) exactly when `T` is
///
/// absence is data: combinators like [`Optional::map`] turn an absent value into another absent
/// value, the only operations that fail on absence are [`Optional::unwrap`] and
/// [`Optional::expect`], which hand the failure to the active [`report::FailureReporter`] and then
/// panic
///
/// conversions between `Optional<U>` and `Optional<T>` only exist when `U: Into<T>`
/// ([`Optional::cast`]) or, explicitly and fallibly, when `T: TryFrom<U>` ([`Optional::try_cast`]),
/// so a narrowing conversion can never happen by accident
#[derive(Debug, Copy, Eq, Hash)]
#[must_use]
pub enum Optional<T> {
    Present(T),
    Absent,
}

/// wraps `value` as [`Optional::Present`]
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// an [`Optional::Absent`] of any type, usable in const contexts
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::Absent
}

/// adds the methods [`OptionExt::into_optional`], [`OptionExt::as_optional_ref`] and [`OptionExt::as_optional_mut`] to [`Option`]
pub trait OptionExt {
    type T;
    /// equivalent to
    /// ```ignore
    /// match self {
    ///     Some(x) => Present(x),
    ///     None => Absent,
    /// }
    /// ```
    fn into_optional(self) -> Optional<Self::T>;
    /// equivalent to
    /// ```ignore
    /// self.as_ref().into_optional()
    /// ```
    fn as_optional_ref(&self) -> Optional<&Self::T>;
    /// equivalent to
    /// ```ignore
    /// self.as_mut().into_optional()
    /// ```
    fn as_optional_mut(&mut self) -> Optional<&mut Self::T>;
}

impl<T> OptionExt for Option<T> {
    type T = T;
    #[inline]
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
    #[inline]
    fn as_optional_ref(&self) -> Optional<&T> {
        self.as_ref().into()
    }
    #[inline]
    fn as_optional_mut(&mut self) -> Optional<&mut T> {
        self.as_mut().into()
    }
}
