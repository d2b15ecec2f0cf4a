//! Typed string identifiers.
//!
//! Each entity kind gets its own newtype so a `PostId` can never be passed
//! where a `CommunityId` is expected. On the wire all of them are plain
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a [`crate::User`].
    UserId
);
string_id!(
    /// Identifier of a [`crate::Community`].
    CommunityId
);
string_id!(
    /// Identifier of a [`crate::Post`].
    PostId
);
string_id!(
    /// Identifier of a [`crate::Comment`].
    CommentId
);
string_id!(
    /// Identifier of a [`crate::Event`].
    EventId
);
