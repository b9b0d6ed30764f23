use std::fmt::{self, Display};

use crate::Optional;

/// see [`Optional::display`] and [`Optional::display_or`]
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptional<'a, T> {
    value: Optional<&'a T>,
    placeholder: &'a str,
}

impl<T: Display> Display for DisplayOptional<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Optional::Present(value) => Display::fmt(value, f),
            Optional::Absent => f.pad(self.placeholder),
        }
    }
}

impl<T> Optional<T> {
    /// borrows `self` as something that implements `Display`: the value when present, an empty
    /// string when absent
    pub fn display(&self) -> DisplayOptional<'_, T> {
        self.display_or("")
    }
    /// like [`Optional::display`], but an absent value displays as `placeholder`
    pub fn display_or<'a>(&'a self, placeholder: &'a str) -> DisplayOptional<'a, T> {
        DisplayOptional {
            value: self.as_ref(),
            placeholder,
        }
    }
}
