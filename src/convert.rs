use crate::Optional::{self, Absent, Present};
use crate::Nothing;

// construction paths
impl<T> Optional<T> {
    /// [`Present`] with a value losslessly converted from `value`
    ///
    /// ```
    /// # use optional::Optional;
    /// let wide = Optional::<i64>::from_value(7_i32);
    /// assert_eq!(wide.unwrap(), 7);
    /// ```
    #[inline]
    pub fn from_value<U: Into<T>>(value: U) -> Self {
        Present(value.into())
    }
    /// [`Present`] with a value built from `value` through a checked conversion
    ///
    /// this is the only way in when `U` does not convert into `T` without loss
    ///
    /// ```
    /// # use optional::Optional;
    /// assert!(Optional::<u8>::try_from_value(300_i32).is_err());
    /// assert_eq!(Optional::<u8>::try_from_value(30_i32).unwrap().unwrap(), 30);
    /// ```
    #[inline]
    pub fn try_from_value<U>(value: U) -> Result<Self, T::Error>
    where
        T: TryFrom<U>,
    {
        T::try_from(value).map(Present)
    }
    /// rebuilds an `Optional<U>` as an `Optional<T>`, converting the value if there is one
    #[inline]
    pub fn convert<U: Into<T>>(other: Optional<U>) -> Self {
        other.map(Into::into)
    }
    /// [`Present`] with the value `f` constructs
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Present(f())
    }
    /// [`Present`] with a value constructed from `args`, pass a tuple for several arguments
    #[inline]
    pub fn from_args<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Present(T::from(args))
    }
    /// [`Present`] with a value collected from `items`
    ///
    /// ```
    /// # use optional::Optional;
    /// let v = Optional::<Vec<f64>>::from_items([1.0, 2.0]);
    /// assert_eq!(v.unwrap(), [1.0, 2.0]);
    /// ```
    #[inline]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        Present(items.into_iter().collect())
    }
    /// converts the contained value into `U`, only offered when nothing can be lost
    #[inline]
    pub fn cast<U>(self) -> Optional<U>
    where
        T: Into<U>,
    {
        Optional::convert(self)
    }
    /// converts the contained value into `U` with a checked conversion
    ///
    /// an absent value always converts, a present one fails with the conversion's own error
    #[inline]
    pub fn try_cast<U>(self) -> Result<Optional<U>, U::Error>
    where
        U: TryFrom<T>,
    {
        match self {
            Present(x) => U::try_from(x).map(Present),
            Absent => Ok(Absent),
        }
    }
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(x) => Some(x),
            Absent => None,
        }
    }
    pub fn as_option_ref(&self) -> Option<&T> {
        match self {
            Present(x) => Some(x),
            Absent => None,
        }
    }
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match self {
            Present(x) => Some(x),
            Absent => None,
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Nothing> for Optional<T> {
    #[inline]
    fn from(_: Nothing) -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Present(x),
            None => Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<'a, T> From<&'a Optional<T>> for Optional<&'a T> {
    fn from(o: &'a Optional<T>) -> Optional<&'a T> {
        o.as_ref()
    }
}

impl<'a, T> From<&'a mut Optional<T>> for Optional<&'a mut T> {
    fn from(o: &'a mut Optional<T>) -> Optional<&'a mut T> {
        o.as_mut()
    }
}
