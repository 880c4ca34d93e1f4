//! Body-overflow scroll-lock adapter.

use page_host::ScrollLockService;

const LOCKED_OVERFLOW: &str = "hidden";
const UNLOCKED_OVERFLOW: &str = "auto";

#[derive(Debug, Clone, Copy, Default)]
/// Browser scroll-lock adapter that toggles `overflow` on `document.body`.
pub struct WebScrollLockService;

/// Returns the `overflow` value written for a lock state.
pub const fn overflow_value(locked: bool) -> &'static str {
    if locked {
        LOCKED_OVERFLOW
    } else {
        UNLOCKED_OVERFLOW
    }
}

impl ScrollLockService for WebScrollLockService {
    fn set_scroll_locked(&self, locked: bool) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let body = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
                .ok_or_else(|| "document body unavailable".to_string())?;
            body.style()
                .set_property("overflow", overflow_value(locked))
                .map_err(|err| format!("failed to set body overflow: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = overflow_value(locked);
            Err("document scroll lock is only available when compiled for wasm32".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_values_match_lock_state() {
        assert_eq!(overflow_value(true), "hidden");
        assert_eq!(overflow_value(false), "auto");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_target_reports_unavailable() {
        assert!(WebScrollLockService.set_scroll_locked(true).is_err());
    }
}
