//! Reference-counted document scroll lock.
//!
//! Each overlay holds a [`ScrollLockGuard`] while open. The host is locked when the first guard is
//! acquired and unlocked when the last one drops, so overlays never unlock each other early and
//! dropping a guard on unmount always restores scrolling.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use page_host::ScrollLockService;

struct ScrollLockState {
    holders: usize,
    service: Rc<dyn ScrollLockService>,
}

impl ScrollLockState {
    fn write(&self, locked: bool) {
        if let Err(err) = self.service.set_scroll_locked(locked) {
            logging::warn!("scroll lock update failed: {err}");
        }
    }
}

#[derive(Clone)]
/// Shared scroll-lock counter backed by a host [`ScrollLockService`].
pub struct ScrollLockRegistry {
    state: Rc<RefCell<ScrollLockState>>,
}

impl ScrollLockRegistry {
    /// Creates an unlocked registry.
    pub fn new(service: Rc<dyn ScrollLockService>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ScrollLockState {
                holders: 0,
                service,
            })),
        }
    }

    /// Acquires one hold on the lock.
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        state.holders += 1;
        if state.holders == 1 {
            state.write(true);
        }
        ScrollLockGuard {
            state: Rc::clone(&self.state),
        }
    }

    /// Number of outstanding guards.
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }

    /// Returns whether any guard is outstanding.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

impl std::fmt::Debug for ScrollLockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockRegistry")
            .field("holders", &self.holders())
            .finish_non_exhaustive()
    }
}

/// One hold on the document scroll lock; released on drop.
pub struct ScrollLockGuard {
    state: Rc<RefCell<ScrollLockState>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.write(false);
        }
    }
}

impl std::fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_host::MemoryScrollLockService;
    use pretty_assertions::assert_eq;

    fn registry() -> (Rc<MemoryScrollLockService>, ScrollLockRegistry) {
        let service = Rc::new(MemoryScrollLockService::default());
        let registry = ScrollLockRegistry::new(service.clone());
        (service, registry)
    }

    #[test]
    fn single_guard_locks_and_unlocks() {
        let (service, registry) = registry();
        let guard = registry.acquire();
        assert!(service.is_locked());
        drop(guard);
        assert!(!service.is_locked());
        assert_eq!(service.writes(), vec![true, false]);
    }

    #[test]
    fn last_guard_unlocks() {
        let (service, registry) = registry();
        let menu = registry.acquire();
        let dialog = registry.acquire();
        assert_eq!(registry.holders(), 2);

        drop(menu);
        assert!(service.is_locked());
        assert!(registry.is_locked());

        drop(dialog);
        assert!(!service.is_locked());
        assert_eq!(service.writes(), vec![true, false]);
    }

    #[test]
    fn relock_after_release_writes_again() {
        let (service, registry) = registry();
        drop(registry.acquire());
        drop(registry.acquire());
        assert_eq!(service.writes(), vec![true, false, true, false]);
    }

    struct FailingService;

    impl ScrollLockService for FailingService {
        fn set_scroll_locked(&self, _locked: bool) -> Result<(), String> {
            Err("no document".to_string())
        }
    }

    #[test]
    fn host_failures_do_not_break_counting() {
        let registry = ScrollLockRegistry::new(Rc::new(FailingService));
        let guard = registry.acquire();
        assert!(registry.is_locked());
        drop(guard);
        assert!(!registry.is_locked());
    }
}
