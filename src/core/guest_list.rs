//! Ordered, duplicate-free guest collection owned by the engine.

use super::guest::Guest;

/// Guests in insertion order, each name appearing at most once.
///
/// Reads are public; every mutation goes through the engine's commands.
#[derive(Clone, Debug, Default)]
pub struct GuestList {
    guests: Vec<Guest>,
}

impl GuestList {
    pub fn new() -> Self {
        Self { guests: Vec::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.name() == name)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter()
    }

    /// Clone every guest matching `predicate`, preserving order.
    pub fn snapshot_where<F>(&self, predicate: F) -> Vec<Guest>
    where
        F: Fn(&Guest) -> bool,
    {
        self.guests.iter().filter(|g| predicate(*g)).cloned().collect()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Guest> {
        self.guests.iter_mut().find(|g| g.name() == name)
    }

    /// Append `guest` unless an equal guest is present. Hands the guest back
    /// on rejection so the caller keeps ownership.
    pub(crate) fn insert(&mut self, guest: Guest) -> Result<(), Guest> {
        if self.contains(guest.name()) {
            return Err(guest);
        }
        self.guests.push(guest);
        Ok(())
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Guest> {
        let index = self.position(name)?;
        Some(self.guests.remove(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.guests.iter().position(|g| g.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str) -> Guest {
        Guest::new(name).unwrap()
    }

    #[test]
    fn new_list_is_empty() {
        let list = GuestList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!list.contains("Ann"));
    }

    #[test]
    fn insert_preserves_order() {
        let mut list = GuestList::new();
        list.insert(guest("Ann")).unwrap();
        list.insert(guest("Bob")).unwrap();
        list.insert(guest("Cid")).unwrap();

        let names: Vec<&str> = list.iter().map(Guest::name).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn insert_rejects_duplicate_and_returns_guest() {
        let mut list = GuestList::new();
        list.insert(guest("Ann")).unwrap();

        let mut again = guest("Ann");
        again.set_rsvp(true);
        let rejected = list.insert(again).unwrap_err();

        assert!(rejected.has_rsvp());
        assert_eq!(list.len(), 1);
        assert!(!list.get("Ann").unwrap().has_rsvp());
    }

    #[test]
    fn remove_returns_stored_guest() {
        let mut list = GuestList::new();
        list.insert(guest("Ann")).unwrap();
        list.insert(guest("Bob")).unwrap();
        list.get_mut("Ann").unwrap().set_rsvp(true);

        let removed = list.remove("Ann").unwrap();
        assert!(removed.has_rsvp());
        assert!(list.remove("Ann").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn snapshot_where_filters_in_order() {
        let mut list = GuestList::new();
        for name in ["A", "B", "C", "D"] {
            list.insert(guest(name)).unwrap();
        }
        list.get_mut("B").unwrap().set_rsvp(true);
        list.get_mut("D").unwrap().set_rsvp(true);

        let confirmed = list.snapshot_where(Guest::has_rsvp);
        let names: Vec<&str> = confirmed.iter().map(Guest::name).collect();
        assert_eq!(names, vec!["B", "D"]);
    }
}
