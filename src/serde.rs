//! `serde` support, an [`Optional`] is (de)serialized exactly like an [`Option`]
//!
//! to leave absent fields out of the output and read missing fields back as absent, combine
//! `default` with `skip_serializing_if`:
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     #[serde(default, skip_serializing_if = "Optional::is_none")]
//!     theme: Optional<String>,
//! }
//! ```
#![cfg(feature = "serde")]

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Just, Nothing, Optional};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl<T: Serialize> Serialize for Just<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Just<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Just)
    }
}

impl Serialize for Nothing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for Nothing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <()>::deserialize(deserializer).map(|()| Nothing)
    }
}
