//! The fixed set of resource kinds addressable on the API.

use std::fmt;

/// A resource kind on the upstream API.
///
/// The string identifier doubles as the URL path segment and as the cache
/// partition name. Adding a kind means extending this enum; there is no
/// runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Character resources (`/character`).
    Character,
    /// Episode resources (`/episode`).
    Episode,
    /// Location resources (`/location`).
    Location,
}

impl Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Endpoint; 3] = [Endpoint::Character, Endpoint::Episode, Endpoint::Location];

    /// Stable string identifier, used as the URL path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Character => "character",
            Endpoint::Episode => "episode",
            Endpoint::Location => "location",
        }
    }

    /// Reverse lookup from a URL path segment.
    pub fn from_segment(segment: &str) -> Option<Endpoint> {
        Endpoint::ALL.into_iter().find(|endpoint| endpoint.as_str() == segment)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_roundtrip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_segment(endpoint.as_str()), Some(endpoint));
        }
    }

    #[test]
    fn test_from_segment_unknown() {
        assert_eq!(Endpoint::from_segment("characters"), None);
        assert_eq!(Endpoint::from_segment(""), None);
        assert_eq!(Endpoint::from_segment("Character"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Endpoint::Episode.to_string(), "episode");
    }
}
