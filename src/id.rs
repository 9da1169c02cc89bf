// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

/// Checks if `raw` has at least 2 characters and starts with `prefix`.
fn is_tagged(raw: &str, prefix: char) -> bool {
    raw.starts_with(prefix) && raw.chars().count() >= 2
}

macro_rules! tagged_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// First character of every valid identifier of this kind.
            pub const PREFIX: char = $prefix;

            /// Creates an identifier from a raw string.
            ///
            /// Strings which don't satisfy [Self::is_valid] are never repaired;
            /// they produce the empty (invalid) identifier instead.
            pub fn new<S: Into<String>>(raw: S) -> Self {
                let raw = raw.into();
                if is_tagged(&raw, Self::PREFIX) {
                    Self(raw)
                } else {
                    Self::default()
                }
            }

            /// Returns true if the identifier has at least 2 characters
            /// and starts with [Self::PREFIX].
            pub fn is_valid(&self) -> bool {
                is_tagged(&self.0, Self::PREFIX)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

tagged_id!(
    /// Identifies a [Point](crate::Point), e.g. `#SP`.
    PointId,
    '#'
);

tagged_id!(
    /// Identifies a [Route](crate::Route), e.g. `&BR116`.
    ///
    /// The empty (invalid) RouteId marks the first [Step](crate::Step) of a path,
    /// which isn't reached through any route.
    RouteId,
    '&'
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_id_validity() {
        assert!(PointId::new("#A").is_valid());
        assert!(PointId::new("#Some Place").is_valid());
        assert!(!PointId::new("#").is_valid());
        assert!(!PointId::new("").is_valid());
        assert!(!PointId::new("&A").is_valid());
        assert!(!PointId::new(" #A").is_valid());
    }

    #[test]
    fn route_id_validity() {
        assert!(RouteId::new("&R1").is_valid());
        assert!(!RouteId::new("&").is_valid());
        assert!(!RouteId::new("#R1").is_valid());
        assert!(!RouteId::default().is_valid());
    }

    #[test]
    fn invalid_ids_become_the_empty_sentinel() {
        assert_eq!(PointId::new("A"), PointId::default());
        assert_eq!(PointId::new("A").as_str(), "");
        assert_eq!(RouteId::new("R1"), RouteId::default());
    }

    #[test]
    fn length_counts_characters() {
        assert!(PointId::new("#é").is_valid());
        assert!(!PointId::new("#").is_valid());
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(PointId::new("#A"), PointId::from("#A"));
        assert_ne!(PointId::new("#A"), PointId::new("#a"));
        assert_ne!(PointId::new("#A"), PointId::new("#A "));
    }

    #[test]
    fn display_and_parse() {
        let id: RouteId = "&R1".parse().unwrap();
        assert_eq!(id.to_string(), "&R1");
        assert_eq!("bogus".parse::<PointId>().unwrap().to_string(), "");
    }
}
