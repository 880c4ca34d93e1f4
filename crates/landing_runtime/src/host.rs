//! Host-side runtime helpers for executing reducer effects and document side effects.
//!
//! The landing runtime never touches browser adapters directly; everything goes through the
//! injected [`PageHostServices`] bundle plus the provider-owned viewport observer kept here.

mod effects;

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use leptos::{logging, RwSignal, SignalUpdate};
use page_host::{PageConfig, PageHostServices, RevealKey};
use page_host_web::WebViewportObserver;

use crate::{
    reducer::RuntimeEffect,
    reveal::RevealRegistry,
    runtime_context::LandingRuntimeContext,
    scroll_lock::{ScrollLockGuard, ScrollLockRegistry},
};

type SharedObserver = Rc<RefCell<Option<WebViewportObserver>>>;

#[derive(Clone)]
/// Host service bundle and provider-owned document resources.
pub struct LandingHostContext {
    services: PageHostServices,
    scroll_lock: ScrollLockRegistry,
    menu_lock: Rc<RefCell<Option<ScrollLockGuard>>>,
    reveal: Rc<RefCell<RevealRegistry<web_sys::Element>>>,
    observer: SharedObserver,
}

impl LandingHostContext {
    /// Wraps the injected host bundle.
    pub fn new(services: PageHostServices) -> Self {
        let scroll_lock = ScrollLockRegistry::new(Rc::clone(&services.scroll_lock));
        let reveal = RevealRegistry::new(services.config.clamped_reveal_threshold());
        Self {
            services,
            scroll_lock,
            menu_lock: Rc::new(RefCell::new(None)),
            reveal: Rc::new(RefCell::new(reveal)),
            observer: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns the page tuning values.
    pub fn config(&self) -> PageConfig {
        self.services.config
    }

    /// Returns the shared scroll-lock registry.
    pub fn scroll_lock(&self) -> &ScrollLockRegistry {
        &self.scroll_lock
    }

    /// Executes one reducer-emitted runtime effect.
    pub fn run_runtime_effect(&self, runtime: LandingRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Takes the mobile menu's hold on the scroll lock if it does not have one yet.
    pub fn acquire_menu_lock(&self) {
        let mut slot = self.menu_lock.borrow_mut();
        if slot.is_none() {
            *slot = Some(self.scroll_lock.acquire());
        }
    }

    /// Drops the mobile menu's hold on the scroll lock.
    pub fn release_menu_lock(&self) {
        let guard = self.menu_lock.borrow_mut().take();
        drop(guard);
    }

    /// Scrolls the element with id `fragment` into view.
    pub fn scroll_to_anchor(&self, fragment: &str) {
        let smooth = self.services.config.smooth_scrolling;
        match self.services.document_scroll.scroll_to_anchor(fragment, smooth) {
            Ok(true) => {}
            Ok(false) => logging::debug_warn!("no element matches anchor `#{fragment}`"),
            Err(err) => logging::warn!("anchor scroll failed: {err}"),
        }
    }

    /// Creates the page's viewport observer, publishing reveals into `revealed`.
    ///
    /// On hosts without viewport observation every registration is revealed immediately.
    pub fn install_viewport_observer(&self, revealed: RwSignal<BTreeSet<RevealKey>>) {
        let reveal = Rc::clone(&self.reveal);
        let observer_slot = Rc::downgrade(&self.observer);
        let threshold = self.services.config.clamped_reveal_threshold();

        let observer = WebViewportObserver::new(threshold, move |samples| {
            let newly_revealed = reveal.borrow_mut().apply_samples(&samples);
            if newly_revealed.is_empty() {
                return;
            }
            if let Some(slot) = observer_slot.upgrade() {
                if let Some(observer) = slot.borrow().as_ref() {
                    for (_, element) in &newly_revealed {
                        observer.unobserve(element);
                    }
                }
            }
            let _ = revealed.try_update(|keys| {
                keys.extend(newly_revealed.iter().map(|(key, _)| *key));
            });
        });

        match observer {
            Ok(observer) => *self.observer.borrow_mut() = Some(observer),
            Err(err) => {
                logging::debug_warn!("viewport observer unavailable ({err}); revealing eagerly")
            }
        }
    }

    /// Registers `element` for reveal-on-scroll and starts observing it.
    pub fn register_reveal(
        &self,
        element: web_sys::Element,
        revealed: RwSignal<BTreeSet<RevealKey>>,
    ) -> RevealKey {
        let key = self.reveal.borrow_mut().register(element.clone());

        let observed = match self.observer.borrow().as_ref() {
            Some(observer) => match observer.observe(&element, key) {
                Ok(()) => true,
                Err(err) => {
                    logging::warn!("failed to observe reveal element: {err}");
                    false
                }
            },
            None => false,
        };

        if !observed && self.reveal.borrow_mut().force_reveal(key) {
            let _ = revealed.try_update(|keys| {
                keys.insert(key);
            });
        }
        key
    }

    /// Removes a reveal registration and stops observing its element.
    pub fn deregister_reveal(&self, key: RevealKey, revealed: RwSignal<BTreeSet<RevealKey>>) {
        let element = self.reveal.borrow_mut().deregister(key);
        if let (Some(element), Some(observer)) = (element, self.observer.borrow().as_ref()) {
            observer.unobserve(&element);
        }
        let _ = revealed.try_update(|keys| {
            keys.remove(&key);
        });
    }

    /// Releases document resources held by the provider.
    pub fn shutdown(&self) {
        self.release_menu_lock();
        let observer = self.observer.borrow_mut().take();
        drop(observer);
    }
}

impl std::fmt::Debug for LandingHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandingHostContext")
            .field("services", &self.services)
            .field("scroll_lock", &self.scroll_lock)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_host::{
        DocumentScrollService, MemoryDocumentScrollService, MemoryScrollLockService,
        ScrollLockService,
    };
    use pretty_assertions::assert_eq;

    fn host_with_memory_lock() -> (Rc<MemoryScrollLockService>, LandingHostContext) {
        let service = Rc::new(MemoryScrollLockService::default());
        let scroll_lock: Rc<dyn ScrollLockService> = service.clone();
        let mut services = PageHostServices::headless();
        services.scroll_lock = scroll_lock;
        (service, LandingHostContext::new(services))
    }

    #[test]
    fn menu_lock_is_held_once() {
        let (service, host) = host_with_memory_lock();
        host.acquire_menu_lock();
        host.acquire_menu_lock();
        assert_eq!(host.scroll_lock().holders(), 1);
        host.release_menu_lock();
        assert!(!service.is_locked());
        assert_eq!(service.writes(), vec![true, false]);
    }

    #[test]
    fn shutdown_releases_open_menu_lock() {
        let (service, host) = host_with_memory_lock();
        host.acquire_menu_lock();
        assert!(service.is_locked());
        host.shutdown();
        assert!(!service.is_locked());
    }

    #[test]
    fn menu_lock_shares_registry_with_other_holders() {
        let (service, host) = host_with_memory_lock();
        let dialog = host.scroll_lock().acquire();
        host.acquire_menu_lock();
        host.release_menu_lock();
        assert!(service.is_locked());
        drop(dialog);
        assert!(!service.is_locked());
    }

    #[test]
    fn anchor_scroll_goes_through_document_service() {
        let document = Rc::new(MemoryDocumentScrollService::with_anchors(["features"]));
        let document_scroll: Rc<dyn DocumentScrollService> = document.clone();
        let mut services = PageHostServices::headless().with_config(PageConfig {
            smooth_scrolling: false,
            ..PageConfig::default()
        });
        services.document_scroll = document_scroll;
        let host = LandingHostContext::new(services);

        host.scroll_to_anchor("features");
        host.scroll_to_anchor("missing");
        assert_eq!(document.visited(), vec!["features".to_string()]);
        assert!(!host.config().smooth_scrolling);
    }
}
