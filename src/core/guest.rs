//! The guest entity.
//!
//! A guest is identified by its name alone. The RSVP flag is mutable state
//! that does not take part in equality or hashing, so two guests with the
//! same name are interchangeable for every membership check.

use super::error::GalaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A person on (or about to be put on) the guest list.
///
/// # Example
///
/// ```rust
/// use gala::core::Guest;
///
/// let mut guest = Guest::new("Helen").unwrap();
/// assert_eq!(guest.name(), "Helen");
/// assert!(!guest.has_rsvp());
///
/// guest.set_rsvp(true);
/// assert_eq!(guest.to_string(), "Guest [name=Helen,rsvp=yes]");
///
/// assert!(Guest::new("   ").is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GuestRecord")]
pub struct Guest {
    name: String,
    rsvp: bool,
}

/// Unchecked wire shape, validated on the way into a [`Guest`].
#[derive(Deserialize)]
struct GuestRecord {
    name: String,
    #[serde(default)]
    rsvp: bool,
}

impl TryFrom<GuestRecord> for Guest {
    type Error = GalaError;

    fn try_from(record: GuestRecord) -> Result<Self, Self::Error> {
        let mut guest = Guest::new(record.name)?;
        guest.rsvp = record.rsvp;
        Ok(guest)
    }
}

impl Guest {
    /// Create a pending guest.
    ///
    /// Fails with [`GalaError::InvalidArgument`] if the name is empty or
    /// consists only of whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, GalaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GalaError::blank_name());
        }
        Ok(Self { name, rsvp: false })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_rsvp(&self) -> bool {
        self.rsvp
    }

    pub fn set_rsvp(&mut self, rsvp: bool) {
        self.rsvp = rsvp;
    }
}

impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Guest {}

impl Hash for Guest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rsvp = if self.rsvp { "yes" } else { "no" };
        write!(f, "Guest [name={},rsvp={}]", self.name, rsvp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(guest: &Guest) -> u64 {
        let mut hasher = DefaultHasher::new();
        guest.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", " ", "   ", "\t", " \n ", "                           "] {
            let err = Guest::new(name).unwrap_err();
            assert_eq!(err, GalaError::blank_name());
            assert_eq!(err.to_string(), "name cannot be null or blank");
        }
    }

    #[test]
    fn new_guest_is_pending() {
        let guest = Guest::new("Helen").unwrap();
        assert_eq!(guest.name(), "Helen");
        assert!(!guest.has_rsvp());
    }

    #[test]
    fn rsvp_flag_toggles() {
        let mut guest = Guest::new("Bob").unwrap();
        guest.set_rsvp(true);
        assert!(guest.has_rsvp());
        guest.set_rsvp(false);
        assert!(!guest.has_rsvp());
    }

    #[test]
    fn equality_ignores_rsvp() {
        let one = Guest::new("Bar").unwrap();
        let mut two = Guest::new(String::from_iter(['B', 'a', 'r'])).unwrap();
        two.set_rsvp(true);

        assert_eq!(one, two);
        assert_eq!(hash_of(&one), hash_of(&two));
    }

    #[test]
    fn equality_is_exact_on_name() {
        let one = Guest::new("Ximena").unwrap();
        assert_ne!(one, Guest::new("Yoyo").unwrap());
        assert_ne!(one, Guest::new("ximena").unwrap());
        assert_ne!(one, Guest::new("Ximena ").unwrap());
    }

    #[test]
    fn display_renders_rsvp_as_yes_or_no() {
        let mut guest = Guest::new("Pedro").unwrap();
        assert_eq!(guest.to_string(), "Guest [name=Pedro,rsvp=no]");

        guest.set_rsvp(true);
        assert_eq!(guest.to_string(), "Guest [name=Pedro,rsvp=yes]");
    }

    #[test]
    fn guest_serializes_correctly() {
        let mut guest = Guest::new("Quincy").unwrap();
        guest.set_rsvp(true);

        let json = serde_json::to_string(&guest).unwrap();
        let deserialized: Guest = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.name(), "Quincy");
        assert!(deserialized.has_rsvp());
    }

    #[test]
    fn deserialization_rejects_blank_name() {
        let result: Result<Guest, _> = serde_json::from_str(r#"{"name":"  ","rsvp":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_rsvp_defaults_to_pending() {
        let guest: Guest = serde_json::from_str(r#"{"name":"Lola"}"#).unwrap();
        assert!(!guest.has_rsvp());
    }
}
