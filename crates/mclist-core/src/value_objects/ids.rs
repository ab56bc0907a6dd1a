//! Typed entity identifiers
//!
//! Every table uses a 32-bit integer primary key. User ids are not generated
//! locally: they are the OAuth provider's account id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create an id from its raw value
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the inner i32 value
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }
    };
}

define_id!(
    /// User id (the provider's account id)
    UserId
);
define_id!(
    /// Server listing id
    ServerId
);
define_id!(TagId);
define_id!(VersionId);
define_id!(VoteId);
