//! Enumerated directive values.
//!
//! Responsibilities:
//! - Define the closed value sets of the enumerated directives
//!   (`mount dev`, `enable overlay`, `root default capabilities`, `memory fs type`).
//! - Map every variant to and from its exact textual token.
//! - Expose each authorized set as a `'static` slice for the schema catalog.
//!
//! Does NOT handle:
//! - Deciding which directive uses which set (see `schema`).
//! - Error reporting with line numbers (see `codec`).
//!
//! Invariants:
//! - Tokens are matched exactly and case-sensitively.
//! - The `#[default]` variant is always a member of `VALUES`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A token that is not a member of an authorized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not one of {{{}}}", .accepted.join(", "))]
pub struct InvalidChoice {
    pub value: String,
    pub accepted: &'static [&'static str],
}

/// Object-safe view over an enumerated value, used by the catalog accessors.
pub trait Choice {
    /// Textual token of the current variant.
    fn as_str(&self) -> &'static str;

    /// The closed set this value belongs to.
    fn accepted(&self) -> &'static [&'static str];

    /// Replace the current variant with the one spelled `token`.
    fn assign(&mut self, token: &str) -> Result<(), InvalidChoice>;
}

/// Defines a closed enumeration with exact textual tokens.
///
/// # Usage
/// ```ignore
/// choice_enum! {
///     /// Doc.
///     MountDev {
///         #[default]
///         Yes => "yes",
///         No => "no",
///     }
/// }
/// ```
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted token, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($token),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = InvalidChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(InvalidChoice {
                        value: s.to_string(),
                        accepted: Self::VALUES,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Choice for $name {
            fn as_str(&self) -> &'static str {
                $name::as_str(*self)
            }

            fn accepted(&self) -> &'static [&'static str] {
                Self::VALUES
            }

            fn assign(&mut self, token: &str) -> Result<(), InvalidChoice> {
                *self = token.parse()?;
                Ok(())
            }
        }
    };
}

choice_enum! {
    /// How much of the host `/dev` is made available in the container.
    MountDev {
        #[default]
        Yes => "yes",
        No => "no",
        /// Only `null`, `zero`, `random`, `urandom` and `shm`.
        Minimal => "minimal",
    }
}

choice_enum! {
    /// Overlay behavior for bind targets missing from the image.
    EnableOverlay {
        Yes => "yes",
        No => "no",
        #[default]
        Try => "try",
        /// Overlay is handled by the configured image driver.
        Driver => "driver",
    }
}

choice_enum! {
    /// Capability set kept by root at runtime.
    RootCapabilities {
        #[default]
        Full => "full",
        File => "file",
        No => "no",
    }
}

choice_enum! {
    /// Filesystem used for in-memory mounts.
    MemoryFsType {
        #[default]
        Tmpfs => "tmpfs",
        Ramfs => "ramfs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_members_of_their_sets() {
        assert!(MountDev::VALUES.contains(&MountDev::default().as_str()));
        assert!(EnableOverlay::VALUES.contains(&EnableOverlay::default().as_str()));
        assert!(RootCapabilities::VALUES.contains(&RootCapabilities::default().as_str()));
        assert!(MemoryFsType::VALUES.contains(&MemoryFsType::default().as_str()));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!("minimal".parse::<MountDev>(), Ok(MountDev::Minimal));
        let err = "Minimal".parse::<MountDev>().unwrap_err();
        assert_eq!(err.value, "Minimal");
        assert_eq!(err.accepted, &["yes", "no", "minimal"]);
    }

    #[test]
    fn test_invalid_choice_message_lists_accepted_set() {
        let err = "bogus".parse::<EnableOverlay>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'bogus' is not one of {yes, no, try, driver}"
        );
    }

    #[test]
    fn test_assign_through_trait_object() {
        let mut caps = RootCapabilities::default();
        let choice: &mut dyn Choice = &mut caps;
        choice.assign("file").unwrap();
        assert_eq!(caps, RootCapabilities::File);

        let choice: &mut dyn Choice = &mut caps;
        assert!(choice.assign("some").is_err());
        assert_eq!(caps, RootCapabilities::File);
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&MemoryFsType::Ramfs).unwrap();
        assert_eq!(json, "\"ramfs\"");
    }
}
