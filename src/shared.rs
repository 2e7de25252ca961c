//! Engine handle for concurrent callers.
//!
//! One coarse lock around the whole engine: a command touches both the
//! guest list and a history stack, and no caller may observe one without
//! the other.

use crate::core::{Command, Gala, GalaError, Guest};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, thread-safe handle to a single [`Gala`].
///
/// # Example
///
/// ```rust
/// use gala::core::{Command, Guest};
/// use gala::shared::SharedGala;
/// use std::thread;
///
/// let gala = SharedGala::default();
/// let handles: Vec<_> = ["Ann", "Bob", "Cid"]
///     .into_iter()
///     .map(|name| {
///         let gala = gala.clone();
///         thread::spawn(move || {
///             gala.execute(Command::add(Guest::new(name).unwrap())).unwrap();
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(gala.undo_depth(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedGala {
    inner: Arc<Mutex<Gala>>,
}

impl SharedGala {
    pub fn new(gala: Gala) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gala)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Gala> {
        self.inner.lock()
    }

    /// Run `f` under a single lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut Gala) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn execute(&self, command: Command) -> Result<(), GalaError> {
        self.lock().execute(command)
    }

    pub fn undo(&self) -> Result<(), GalaError> {
        self.lock().undo()
    }

    pub fn redo(&self) -> Result<(), GalaError> {
        self.lock().redo()
    }

    pub fn has_guest(&self, guest: &Guest) -> bool {
        self.lock().has_guest(guest)
    }

    pub fn list_guests(&self) -> Vec<Guest> {
        self.lock().list_guests()
    }

    pub fn list_pending(&self) -> Vec<Guest> {
        self.lock().list_pending()
    }

    pub fn list_confirmed(&self) -> Vec<Guest> {
        self.lock().list_confirmed()
    }

    pub fn undo_depth(&self) -> usize {
        self.lock().undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.lock().redo_depth()
    }
}

impl From<Gala> for SharedGala {
    fn from(gala: Gala) -> Self {
        Self::new(gala)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    fn guest(name: &str) -> Guest {
        Guest::new(name).unwrap()
    }

    #[test]
    fn engine_types_are_send_and_sync() {
        assert_send_sync::<Gala>();
        assert_send_sync::<Guest>();
        assert_send_sync::<Command>();
        assert_send_sync::<SharedGala>();
    }

    #[test]
    fn panicking_caller_does_not_wedge_the_engine() {
        let gala = SharedGala::default();
        gala.execute(Command::add(guest("Ann"))).unwrap();

        let other = gala.clone();
        let result = thread::spawn(move || {
            other.with(|_| panic!("caller bug while holding the lock"));
        })
        .join();

        assert!(result.is_err());
        gala.undo().unwrap();
        assert!(gala.list_guests().is_empty());
    }

    #[test]
    fn clones_share_one_engine() {
        let gala = SharedGala::default();
        let other = gala.clone();

        gala.execute(Command::add(guest("Ann"))).unwrap();

        assert!(other.has_guest(&guest("Ann")));
        assert_eq!(other.undo_depth(), 1);
    }

    #[test]
    fn concurrent_adds_of_same_guest_admit_exactly_one() {
        let gala = SharedGala::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gala = gala.clone();
                thread::spawn(move || gala.execute(Command::add(guest("Ann"))).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(gala.list_guests().len(), 1);
        assert_eq!(gala.undo_depth(), 1);
    }

    #[test]
    fn concurrent_edits_keep_partition_consistent() {
        let gala = SharedGala::default();
        for i in 0..4 {
            gala.execute(Command::add(guest(&format!("g{i}")))).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let gala = gala.clone();
                thread::spawn(move || {
                    let g = guest(&format!("g{i}"));
                    for round in 0..10 {
                        gala.execute(Command::set_rsvp(&g, round % 2 == 0)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        gala.with(|gala| {
            assert_eq!(gala.list_pending().len() + gala.list_confirmed().len(), 4);
            assert_eq!(gala.undo_depth(), 44);
        });
    }

    #[test]
    fn with_runs_multi_step_work_atomically() {
        let gala = SharedGala::from(Gala::new());

        let depth = gala.with(|gala| {
            gala.execute(Command::add(guest("Ann"))).unwrap();
            gala.undo().unwrap();
            gala.redo_depth()
        });

        assert_eq!(depth, 1);
        assert!(gala.list_guests().is_empty());
        gala.redo().unwrap();
        assert_eq!(gala.list_pending(), vec![guest("Ann")]);
    }
}
