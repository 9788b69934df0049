//! Dotted numeric versions with an "unknown" sentinel.

use crate::ParseVersionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A dot-separated numeric version such as `6.0.30`.
///
/// Unlike [semver](https://semver.org) versions, any number of components
/// is allowed (`6`, `6.0.30`, `12.2.0.1`). Comparison is numeric per
/// component, and a missing trailing component counts as `0`, so `6.0`
/// equals `6.0.0`.
///
/// [`Version::NULL`] stands for "unknown". It sorts below every real
/// version, so an undetected library always counts as too old. It
/// displays as `unknown`, and parsing `unknown` gives it back.
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::Version;
///
/// let found: Version = "6.0.28".parse().unwrap();
/// let required: Version = "6.0.30".parse().unwrap();
/// assert!(found < required);
/// assert!(Version::NULL < found);
/// assert_eq!(found.to_string(), "6.0.28");
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    // Empty means NULL; parsing never produces an empty list.
    components: Vec<u64>,
}

impl Version {
    /// The unknown version.
    pub const NULL: Version = Version {
        components: Vec::new(),
    };

    /// Build a version from its numeric components.
    ///
    /// An empty list yields [`Version::NULL`].
    pub fn from_components(components: impl Into<Vec<u64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Whether this is [`Version::NULL`].
    pub fn is_null(&self) -> bool {
        self.components.is_empty()
    }

    /// The numeric components, empty for [`Version::NULL`].
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..len]
    }
}

/// How [`Version::NULL`] is displayed and parsed.
const NULL_DISPLAY: &str = "unknown";

impl Default for Version {
    fn default() -> Self {
        Self::NULL
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        if s == NULL_DISPLAY {
            return Ok(Self::NULL);
        }

        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    return Err(ParseVersionError::EmptyComponent);
                }
                if !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseVersionError::InvalidComponent(part.to_string()));
                }
                part.parse::<u64>()
                    .map_err(|_| ParseVersionError::Overflow(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL_DISPLAY);
        }
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_null().hash(state);
        self.significant().hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::NULL),
            Some(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(v("6.0.30").components(), &[6, 0, 30]);
        assert_eq!(v("6.0.30").to_string(), "6.0.30");
        assert_eq!(v("12").to_string(), "12");
        assert_eq!(v("12.2.0.1").to_string(), "12.2.0.1");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Version>(), Err(ParseVersionError::Empty));
        assert_eq!(
            "6.".parse::<Version>(),
            Err(ParseVersionError::EmptyComponent)
        );
        assert_eq!(
            ".6".parse::<Version>(),
            Err(ParseVersionError::EmptyComponent)
        );
        assert_eq!(
            "6.0.x".parse::<Version>(),
            Err(ParseVersionError::InvalidComponent("x".to_string()))
        );
        assert_eq!(
            "6.+1".parse::<Version>(),
            Err(ParseVersionError::InvalidComponent("+1".to_string()))
        );
        assert!(matches!(
            "99999999999999999999999".parse::<Version>(),
            Err(ParseVersionError::Overflow(_))
        ));
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("6.0.9") < v("6.0.10"));
        assert!(v("6.0.30") < v("6.1"));
        assert!(v("12.2.0") > v("6.0.30"));
        assert!(v("6.0.30") >= v("6.0.30"));
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert_eq!(v("6.0"), v("6.0.0"));
        assert_eq!(v("6"), v("6.0.0.0"));
        assert!(v("6.0") < v("6.0.1"));
    }

    #[test]
    fn test_null_sorts_first() {
        assert!(Version::NULL < v("0"));
        assert!(Version::NULL < v("0.0.1"));
        assert!(Version::NULL < v("6.0.30"));
        assert_eq!(Version::NULL, Version::NULL);
        assert_ne!(Version::NULL, v("0"));
        assert!(Version::NULL.is_null());
        assert!(!v("0").is_null());
    }

    #[test]
    fn test_null_round_trips_through_display() {
        let parsed: Version = Version::NULL.to_string().parse().unwrap();
        assert!(parsed.is_null());
        assert_eq!(parsed, Version::NULL);
        assert!("Unknown".parse::<Version>().is_err());
    }

    #[test]
    fn test_null_display_and_default() {
        assert_eq!(Version::NULL.to_string(), "unknown");
        assert!(Version::default().is_null());
        assert!(Version::from_components(Vec::new()).is_null());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(v("6.0"));
        set.insert(v("6.0.0"));
        set.insert(v("6.0.30"));
        set.insert(Version::NULL);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_serde_shapes() {
        assert_eq!(serde_json::to_string(&v("6.0.30")).unwrap(), "\"6.0.30\"");
        assert_eq!(serde_json::to_string(&Version::NULL).unwrap(), "null");

        let parsed: Version = serde_json::from_str("\"12.2.0\"").unwrap();
        assert_eq!(parsed, v("12.2.0"));
        let null: Version = serde_json::from_str("null").unwrap();
        assert!(null.is_null());
        assert!(serde_json::from_str::<Version>("\"six\"").is_err());
    }
}
