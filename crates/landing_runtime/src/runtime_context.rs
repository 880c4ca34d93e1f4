//! Runtime provider and context wiring for the landing page.
//!
//! This module owns the reducer container, runtime effect queue, reveal flags, and the host
//! bundle. UI composition stays in [`crate::components`].

use std::collections::BTreeSet;

use leptos::{html::Div, *};
use page_host::{PageHostServices, RevealKey};

use crate::{
    effect_executor,
    host::LandingHostContext,
    reducer::{reduce_page, PageAction, PageState, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading page state and dispatching [`PageAction`] values.
pub struct LandingRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<LandingHostContext>,
    /// Reactive page state signal.
    pub state: RwSignal<PageState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Keys of reveal registrations that have become visible.
    pub revealed: RwSignal<BTreeSet<RevealKey>>,
    /// Horizontal scroll container of the featured carousel.
    pub carousel: NodeRef<Div>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PageAction>,
}

impl LandingRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PageAction) {
        self.dispatch.call(action);
    }

    /// Returns whether the registration `key` has been revealed.
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.with(|keys| keys.contains(&key))
    }

    /// Registers `element` for reveal-on-scroll.
    pub fn register_reveal(&self, element: web_sys::Element) -> RevealKey {
        self.host
            .with_value(|host| host.register_reveal(element, self.revealed))
    }

    /// Removes a reveal registration.
    pub fn deregister_reveal(&self, key: RevealKey) {
        let revealed = self.revealed;
        let _ = self
            .host
            .try_with_value(|host| host.deregister_reveal(key, revealed));
    }

    /// Closes the mobile menu and drops its scroll lock without going through the effect queue.
    ///
    /// Used on unmount, when queued effects would no longer run.
    pub fn release_mobile_menu(&self) {
        let _ = self.host.try_with_value(|host| host.release_menu_lock());
        let _ = self
            .state
            .try_update_untracked(|state| state.mobile_menu_open = false);
    }

    /// Scrolls to the in-page anchor `fragment`.
    pub fn scroll_to_anchor(&self, fragment: &str) {
        self.host.with_value(|host| host.scroll_to_anchor(fragment));
    }
}

/// Builds the page runtime over `host_services` and starts its effect executor and viewport
/// observer. Must run inside a reactive owner.
pub(crate) fn create_landing_runtime(
    host_services: PageHostServices,
) -> (LandingRuntimeContext, LandingHostContext) {
    let host_context = LandingHostContext::new(host_services);
    let config = host_context.config();
    let host = store_value(host_context.clone());
    let state = create_rw_signal(PageState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let revealed = create_rw_signal(BTreeSet::<RevealKey>::new());
    let carousel = create_node_ref::<Div>();

    let dispatch = Callback::new(move |action: PageAction| {
        let mut page = state.get_untracked();
        let previous = page;

        match reduce_page(&mut page, &config, action) {
            Ok(new_effects) => {
                if page != previous {
                    state.set(page);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("page reducer error: {err}"),
        }
    });

    let runtime = LandingRuntimeContext {
        host,
        state,
        effects,
        revealed,
        carousel,
        dispatch,
    };

    host_context.install_viewport_observer(revealed);
    effect_executor::install(runtime);

    (runtime, host_context)
}

#[component]
/// Provides [`LandingRuntimeContext`] to descendant components.
pub fn LandingProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: PageHostServices,
    children: Children,
) -> impl IntoView {
    let (runtime, host_context) = create_landing_runtime(host_services);
    provide_context(runtime);

    on_cleanup(move || host_context.shutdown());

    children().into_view()
}

/// Returns the current [`LandingRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`LandingProvider`].
pub fn use_landing_runtime() -> LandingRuntimeContext {
    use_context::<LandingRuntimeContext>().expect("LandingRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use page_host::{MemoryScrollLockService, ScrollLockService};
    use pretty_assertions::assert_eq;

    fn runtime_with_memory_lock() -> (Rc<MemoryScrollLockService>, LandingRuntimeContext) {
        let service = Rc::new(MemoryScrollLockService::default());
        let scroll_lock: Rc<dyn ScrollLockService> = service.clone();
        let mut services = PageHostServices::headless();
        services.scroll_lock = scroll_lock;
        let (runtime, _host) = create_landing_runtime(services);
        (service, runtime)
    }

    fn dispatch(runtime: LandingRuntimeContext, action: PageAction) {
        runtime.dispatch_action(action);
        effect_executor::drain(runtime);
    }

    #[test]
    fn menu_toggle_locks_and_unlocks_page_scroll() {
        let _ = create_runtime();
        let (service, runtime) = runtime_with_memory_lock();

        dispatch(runtime, PageAction::ToggleMobileMenu);
        assert!(service.is_locked());
        assert!(runtime.state.get_untracked().mobile_menu_open);

        dispatch(runtime, PageAction::ToggleMobileMenu);
        assert!(!service.is_locked());
        assert_eq!(service.writes(), vec![true, false]);
    }

    #[test]
    fn close_action_releases_menu_lock() {
        let _ = create_runtime();
        let (service, runtime) = runtime_with_memory_lock();

        dispatch(runtime, PageAction::ToggleMobileMenu);
        dispatch(runtime, PageAction::CloseMobileMenu);
        assert!(!service.is_locked());
        assert!(!runtime.state.get_untracked().mobile_menu_open);
    }

    #[test]
    fn unmount_release_clears_lock_and_closes_menu() {
        let _ = create_runtime();
        let (service, runtime) = runtime_with_memory_lock();

        dispatch(runtime, PageAction::ToggleMobileMenu);
        assert!(service.is_locked());

        runtime.release_mobile_menu();
        assert!(!service.is_locked());
        assert!(!runtime.state.get_untracked().mobile_menu_open);
    }

    #[test]
    fn carousel_scroll_before_mount_drains_queue() {
        let _ = create_runtime();
        let (_service, runtime) = runtime_with_memory_lock();

        dispatch(
            runtime,
            PageAction::ScrollCarousel {
                direction: crate::reducer::CarouselDirection::Right,
                viewport_width: 640.0,
            },
        );
        assert_eq!(runtime.effects.get_untracked(), Vec::new());
        assert_eq!(runtime.state.get_untracked(), PageState::default());
    }
}
