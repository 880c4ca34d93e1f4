//! Runtime-effect dispatch for the landing host boundary.

use crate::{host::LandingHostContext, reducer::RuntimeEffect, runtime_context::LandingRuntimeContext};

pub(super) fn run_runtime_effect(
    host: LandingHostContext,
    runtime: LandingRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::AcquireScrollLock => host.acquire_menu_lock(),
        RuntimeEffect::ReleaseScrollLock => host.release_menu_lock(),
        RuntimeEffect::ScrollCarouselBy { delta_px } => {
            scroll_carousel_by(runtime, delta_px, host.config().smooth_scrolling)
        }
    }
}

fn scroll_carousel_by(runtime: LandingRuntimeContext, delta_px: f64, smooth: bool) {
    let Some(container) = runtime.carousel.get_untracked() else {
        leptos::logging::debug_warn!("carousel scroll requested before the container mounted");
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        let element: &web_sys::Element = &container;
        let options = web_sys::ScrollToOptions::new();
        options.set_left(delta_px);
        options.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Auto
        });
        element.scroll_by_with_scroll_to_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (container, delta_px, smooth);
}
