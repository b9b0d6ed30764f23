use crate::report;
use crate::Error;
use crate::Nothing;
use crate::Optional::{self, Absent, Present};

use std::ops::{BitOr, Deref, DerefMut};
use std::{hint, mem};

// state queries
impl<T> Optional<T> {
    #[doc(alias = "is_present")]
    #[must_use = "if you intended to assert that this has a value, consider `.unwrap()` instead"]
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(*self, Present(_))
    }
    #[doc(alias = "is_absent")]
    #[must_use = "if you intended to assert that this doesn't have a value, consider \
                  wrapping this in an `assert!()` instead"]
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }
    /// `false` when absent, otherwise whatever `f` says about the value
    ///
    /// `f` is not called on an absent value, use `as_ref()` first to test by reference
    #[must_use]
    #[inline]
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Present(x) => f(x),
            Absent => false,
        }
    }
    /// `true` when absent, otherwise whatever `f` says about the value
    #[must_use]
    #[inline]
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Present(x) => f(x),
            Absent => true,
        }
    }
}

// unwrapping
impl<T> Optional<T> {
    /// moves the value out
    ///
    /// # Panics
    ///
    /// when absent, after passing an [`Error::AbsentValueAccess`] to the active
    /// [`FailureReporter`](crate::report::FailureReporter), the panic payload is that [`Error`]
    #[inline(always)]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(val) => val,
            Absent => unwrap_failed::<T>(),
        }
    }
    /// like [`Optional::unwrap`] but the failure carries `msg`
    #[doc(alias = "expected")]
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Present(val) => val,
            Absent => expect_failed::<T>(msg),
        }
    }
    /// the non panicking form of [`Optional::unwrap`], nothing is reported
    #[inline]
    pub fn try_unwrap(self) -> Result<T, Error> {
        self.ok_or_else(Error::unwrap_absent)
    }
    /// the non panicking form of [`Optional::expect`], nothing is reported
    #[inline]
    pub fn try_expect(self, msg: &str) -> Result<T, Error> {
        self.ok_or_else(|| Error::expect_absent(msg))
    }
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Present(x) => x,
            Absent => fallback,
        }
    }
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Present(x) => x,
            Absent => T::default(),
        }
    }
    #[inline]
    #[track_caller]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(x) => x,
            Absent => f(),
        }
    }
    /// moves the value out without checking that there is one
    ///
    /// meant for hot paths where presence was already established
    ///
    /// # Safety
    ///
    /// calling this on an absent value is undefined behavior
    #[inline]
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Present(val) => val,
            // SAFETY: the caller guarantees the value is present
            Absent => unsafe { hint::unreachable_unchecked() },
        }
    }
}

// mutation
impl<T> Optional<T> {
    /// stores `value`, dropping the previous one, and returns it
    #[must_use = "if you intended to set a value, consider `set` instead"]
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        self.insert_with(|| value)
    }
    /// stores the value `f` constructs, dropping the previous one, and returns it
    #[inline]
    pub fn insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        *self = Present(f());
        match self {
            Present(x) => x,
            // SAFETY: just assigned
            Absent => unsafe { hint::unreachable_unchecked() },
        }
    }
    /// returns the value, storing `value` first if absent
    ///
    /// a present value is left as it is and `value` is dropped
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }
    /// returns the value, storing what `f` constructs first if absent
    ///
    /// `f` is only called when absent
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Absent = self {
            *self = Present(f());
        }
        match self {
            Present(x) => x,
            // SAFETY: present either before the call or through the assignment above
            Absent => unsafe { hint::unreachable_unchecked() },
        }
    }
    /// same as [`Optional::insert`], for emplace style call sites
    ///
    /// the previous value is dropped, use [`Optional::take`] first to keep it
    #[inline]
    pub fn replace(&mut self, value: T) -> &mut T {
        self.insert_with(|| value)
    }
    /// same as [`Optional::insert_with`]
    #[inline]
    pub fn replace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.insert_with(f)
    }
    /// replaces the value with the one `f` constructs, unless `f` fails
    ///
    /// on failure the error is returned as is and the previous state is kept
    #[inline]
    pub fn try_replace_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = f()?;
        Ok(self.insert_with(|| value))
    }
    /// assigns anything that converts into an `Optional<T>`, such as [`Just`](crate::Just),
    /// [`Nothing`] or an [`Option`]
    #[inline]
    pub fn set(&mut self, value: impl Into<Optional<T>>) {
        *self = value.into();
    }
    /// drops the value, if any
    #[inline]
    pub fn clear(&mut self) {
        *self = Absent;
    }
    #[inline]
    pub const fn take(&mut self) -> Optional<T> {
        mem::replace(self, Absent)
    }
    /// takes the value only if `predicate` holds for it
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&mut T) -> bool,
    {
        if self.as_mut().map_or(predicate, false) {
            self.take()
        } else {
            Absent
        }
    }
    /// calls `f` with a reference to the value, if present, and passes `self` along
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Present(ref x) = self {
            f(x);
        }
        self
    }
}

// views
impl<T> Optional<T> {
    /// borrows the value without moving or copying it
    ///
    /// the view is read only:
    /// ```compile_fail
    /// let mut o = optional::some(String::from("x"));
    /// o.as_ref().unwrap().push('y');
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Present(ref x) => Present(x),
            Absent => Absent,
        }
    }
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match *self {
            Present(ref mut x) => Present(x),
            Absent => Absent,
        }
    }
    #[inline]
    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|t| t.deref())
    }
    #[inline]
    pub fn as_deref_mut(&mut self) -> Optional<&mut T::Target>
    where
        T: DerefMut,
    {
        self.as_mut().map(|t| t.deref_mut())
    }
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        match self {
            Present(x) => std::slice::from_ref(x),
            Absent => &[],
        }
    }
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Present(x) => std::slice::from_mut(x),
            Absent => &mut [],
        }
    }
}

// combinators
impl<T> Optional<T> {
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(x) => Present(f(x)),
            Absent => Absent,
        }
    }
    /// `f(value)` when present, `default` otherwise
    ///
    /// note the order: the function comes first
    #[inline]
    #[must_use = "if you don't need the returned value, use `if let` instead"]
    pub fn map_or<U, F>(self, f: F, default: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(x) => f(x),
            Absent => default,
        }
    }
    /// `f(value)` when present, `default()` otherwise
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Present(x) => f(x),
            Absent => default(),
        }
    }
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Present(v) => Ok(v),
            Absent => Err(err),
        }
    }
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Present(v) => Ok(v),
            Absent => Err(err()),
        }
    }
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }
    #[doc(alias = "flatmap")]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Present(x) => f(x),
            Absent => Absent,
        }
    }
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(x) if predicate(&x) => Present(x),
            _ => Absent,
        }
    }
    /// `self` if present, `other` otherwise, also written `self | other`
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            x @ Present(_) => x,
            Absent => other,
        }
    }
    #[inline]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            x @ Present(_) => x,
            Absent => f(),
        }
    }
    #[inline]
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (a @ Present(_), Absent) => a,
            (Absent, b @ Present(_)) => b,
            _ => Absent,
        }
    }
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }
}

impl<T> BitOr for Optional<T> {
    type Output = Optional<T>;
    #[inline]
    fn bitor(self, rhs: Optional<T>) -> Optional<T> {
        self.or(rhs)
    }
}

impl<T> BitOr<Nothing> for Optional<T> {
    type Output = Optional<T>;
    #[inline]
    fn bitor(self, _: Nothing) -> Optional<T> {
        self
    }
}

impl<T, U> Optional<(T, U)> {
    #[inline]
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        match self {
            Present((a, b)) => (Present(a), Present(b)),
            Absent => (Absent, Absent),
        }
    }
}

impl<T> Optional<&T> {
    pub const fn copied(self) -> Optional<T>
    where
        T: Copy,
    {
        match self {
            Present(&v) => Present(v),
            Absent => Absent,
        }
    }
    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        self.map(T::clone)
    }
}

impl<T> Optional<&mut T> {
    pub fn copied(self) -> Optional<T>
    where
        T: Copy,
    {
        self.map(|&mut v| v)
    }
    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        self.map(|v| v.clone())
    }
}

impl<T, E> Optional<Result<T, E>> {
    #[inline]
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self {
            Present(Ok(x)) => Ok(Present(x)),
            Present(Err(e)) => Err(e),
            Absent => Ok(Absent),
        }
    }
}

impl<T> Optional<Optional<T>> {
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Present(inner) => inner,
            Absent => Absent,
        }
    }
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        self.as_ref().cloned()
    }
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Present(to), Present(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

#[cold]
#[track_caller]
fn unwrap_failed<T>() -> ! {
    report::fail::<T>(Error::unwrap_absent())
}

#[cold]
#[track_caller]
fn expect_failed<T>(msg: &str) -> ! {
    report::fail::<T>(Error::expect_absent(msg))
}
