use std::borrow::Cow;

use thiserror::Error;

pub(crate) const UNWRAP_ABSENT: &str = "unwrap of absent value";

/// the failures an [`Optional`](crate::Optional) can report
///
/// only reading the value out of an absent container is a failure, everything else treats
/// absence as an ordinary state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// a value was required but the container was absent
    ///
    /// `message` is either the generic unwrap message or the one passed to
    /// [`Optional::expect`](crate::Optional::expect)
    #[error("{message}")]
    AbsentValueAccess { message: Cow<'static, str> },
}

impl Error {
    pub(crate) fn unwrap_absent() -> Self {
        Self::AbsentValueAccess {
            message: Cow::Borrowed(UNWRAP_ABSENT),
        }
    }
    pub(crate) fn expect_absent(msg: &str) -> Self {
        Self::AbsentValueAccess {
            message: Cow::Owned(msg.to_owned()),
        }
    }
    /// the message carried by the failure
    pub fn message(&self) -> &str {
        match self {
            Self::AbsentValueAccess { message } => message,
        }
    }
}
