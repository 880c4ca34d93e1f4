//! `IntersectionObserver` wrapper delivering typed [`ViewportSample`] batches.

use page_host::{RevealKey, ViewportSample};
#[cfg(target_arch = "wasm32")]
use page_host::REVEAL_KEY_ATTRIBUTE;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Browser viewport observer; disconnects when dropped.
pub struct WebViewportObserver {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl WebViewportObserver {
    /// Creates an observer firing when elements cross `threshold` visibility.
    ///
    /// `on_samples` receives one batch per observer callback. Entries whose target lacks a
    /// parseable reveal key attribute are skipped.
    pub fn new<F>(threshold: f64, on_samples: F) -> Result<Self, String>
    where
        F: FnMut(Vec<ViewportSample>) + 'static,
    {
        #[cfg(target_arch = "wasm32")]
        {
            let mut on_samples = on_samples;
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::wrap(
                Box::new(move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    let samples = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                        .filter_map(|entry| {
                            let key = entry
                                .target()
                                .get_attribute(REVEAL_KEY_ATTRIBUTE)
                                .and_then(|raw| RevealKey::from_attribute_value(&raw))?;
                            Some(ViewportSample {
                                key,
                                ratio: entry.intersection_ratio(),
                                intersecting: entry.is_intersecting(),
                            })
                        })
                        .collect::<Vec<_>>();
                    if !samples.is_empty() {
                        on_samples(samples);
                    }
                }),
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            )
            .map_err(|err| format!("failed to create intersection observer: {err:?}"))?;

            Ok(Self {
                observer,
                _callback: callback,
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (threshold, on_samples);
            Err("viewport observation is only available when compiled for wasm32".to_string())
        }
    }

    /// Tags `element` with `key` and starts observing it.
    pub fn observe(&self, element: &web_sys::Element, key: RevealKey) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            element
                .set_attribute(REVEAL_KEY_ATTRIBUTE, &key.attribute_value())
                .map_err(|err| format!("failed to tag reveal element: {err:?}"))?;
            self.observer.observe(element);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (element, key);
            Ok(())
        }
    }

    /// Stops observing `element`.
    pub fn unobserve(&self, element: &web_sys::Element) {
        #[cfg(target_arch = "wasm32")]
        self.observer.unobserve(element);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = element;
    }
}

impl Drop for WebViewportObserver {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for WebViewportObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebViewportObserver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_target_cannot_create_observer() {
        assert!(WebViewportObserver::new(0.1, |_| {}).is_err());
    }
}
