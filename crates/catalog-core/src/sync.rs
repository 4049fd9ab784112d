//! Lock helper for state shared between a test and the tasks it drives.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a `Mutex` whether or not a previous holder panicked.
///
/// Used by the scripted source and the fixture server, whose bookkeeping stays
/// valid after a panicking test thread.
pub trait IgnoreLock<T> {
    /// Lock the mutex, recovering the guard if it was poisoned.
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T>;
}

impl<T> IgnoreLock<T> for Mutex<T> {
    fn lock_ignore_poison(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_poisoned_lock_still_yields_guard() {
        let shared = Arc::new(Mutex::new(vec![1]));
        let worker = Arc::clone(&shared);
        let outcome = thread::spawn(move || {
            let mut guard = worker.lock_ignore_poison();
            guard.push(2);
            panic!("poison the lock");
        })
        .join();

        assert!(outcome.is_err());
        assert!(shared.is_poisoned());
        assert_eq!(*shared.lock_ignore_poison(), vec![1, 2]);
    }
}
