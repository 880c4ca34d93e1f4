//! Document scroll host-service contracts and non-browser adapters.

use std::cell::RefCell;

/// Host service that suspends or restores background scrolling of the whole document.
pub trait ScrollLockService {
    /// Locks (`true`) or unlocks (`false`) document scrolling.
    fn set_scroll_locked(&self, locked: bool) -> Result<(), String>;
}

/// Host service for document-level programmatic scrolling.
pub trait DocumentScrollService {
    /// Scrolls the element whose id equals `fragment` into view.
    ///
    /// Returns `Ok(false)` when no element matches.
    fn scroll_to_anchor(&self, fragment: &str, smooth: bool) -> Result<bool, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op scroll-lock service for unsupported targets.
pub struct NoopScrollLockService;

impl ScrollLockService for NoopScrollLockService {
    fn set_scroll_locked(&self, _locked: bool) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op document scroll service for unsupported targets.
pub struct NoopDocumentScrollService;

impl DocumentScrollService for NoopDocumentScrollService {
    fn scroll_to_anchor(&self, _fragment: &str, _smooth: bool) -> Result<bool, String> {
        Ok(false)
    }
}

#[derive(Debug, Default)]
/// In-memory scroll-lock service recording every host write.
pub struct MemoryScrollLockService {
    writes: RefCell<Vec<bool>>,
}

impl MemoryScrollLockService {
    /// Returns the current lock state (the last written value, unlocked when never written).
    pub fn is_locked(&self) -> bool {
        self.writes.borrow().last().copied().unwrap_or(false)
    }

    /// Returns every value written to the host, oldest first.
    pub fn writes(&self) -> Vec<bool> {
        self.writes.borrow().clone()
    }
}

impl ScrollLockService for MemoryScrollLockService {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), String> {
        self.writes.borrow_mut().push(locked);
        Ok(())
    }
}

#[derive(Debug, Default)]
/// In-memory document scroll service with a fixed set of known anchor ids.
pub struct MemoryDocumentScrollService {
    anchors: Vec<String>,
    visited: RefCell<Vec<String>>,
}

impl MemoryDocumentScrollService {
    /// Creates a service that resolves the supplied anchor ids.
    pub fn with_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
            visited: RefCell::default(),
        }
    }

    /// Returns anchors that were scrolled into view, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl DocumentScrollService for MemoryDocumentScrollService {
    fn scroll_to_anchor(&self, fragment: &str, _smooth: bool) -> Result<bool, String> {
        if !self.anchors.iter().any(|anchor| anchor == fragment) {
            return Ok(false);
        }
        self.visited.borrow_mut().push(fragment.to_string());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_scroll_lock_tracks_last_write() {
        let service = MemoryScrollLockService::default();
        let service_obj: &dyn ScrollLockService = &service;
        assert!(!service.is_locked());

        service_obj.set_scroll_locked(true).expect("lock");
        assert!(service.is_locked());
        service_obj.set_scroll_locked(false).expect("unlock");
        assert!(!service.is_locked());
        assert_eq!(service.writes(), vec![true, false]);
    }

    #[test]
    fn memory_document_scroll_only_visits_known_anchors() {
        let service = MemoryDocumentScrollService::with_anchors(["featured"]);
        assert_eq!(service.scroll_to_anchor("featured", true), Ok(true));
        assert_eq!(service.scroll_to_anchor("missing", true), Ok(false));
        assert_eq!(service.visited(), vec!["featured".to_string()]);
    }
}
