//! iterators over the zero or one value of an [`Optional`]

use std::iter::FusedIterator;

use crate::Optional;

macro_rules! iterator {
    ($(#[$meta:meta])* $name:ident<$($lt:lifetime,)? $t:ident> => $item:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<$($lt,)? $t>(std::option::IntoIter<$item>);

        impl<$($lt,)? $t> Iterator for $name<$($lt,)? $t> {
            type Item = $item;
            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.0.next()
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $name<$($lt,)? $t> {
            #[inline]
            fn next_back(&mut self) -> Option<$item> {
                self.0.next_back()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $name<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $name<$($lt,)? $t> {}
    };
}

iterator! {
    /// borrows the value of an [`Optional`], see [`Optional::iter`]
    Iter<'a, T> => &'a T
}

iterator! {
    /// mutably borrows the value of an [`Optional`], see [`Optional::iter_mut`]
    IterMut<'a, T> => &'a mut T
}

iterator! {
    /// moves the value out of an [`Optional`]
    IntoIter<T> => T
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Optional<T> {
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.as_option_ref().into_iter())
    }
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.as_option_mut().into_iter())
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.into_option().into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
