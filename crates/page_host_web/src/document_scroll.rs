//! In-page anchor scrolling adapter.

use page_host::DocumentScrollService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser adapter that scrolls anchor targets into view.
pub struct WebDocumentScrollService;

impl DocumentScrollService for WebDocumentScrollService {
    fn scroll_to_anchor(&self, fragment: &str, smooth: bool) -> Result<bool, String> {
        if fragment.is_empty() {
            return Ok(false);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let Some(target) = document.get_element_by_id(fragment) else {
                return Ok(false);
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(if smooth {
                web_sys::ScrollBehavior::Smooth
            } else {
                web_sys::ScrollBehavior::Auto
            });
            target.scroll_into_view_with_scroll_into_view_options(&options);
            Ok(true)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = smooth;
            Ok(false)
        }
    }
}
