use std::rc::Rc;

use page_host::{HostStrategy, PageConfig, PageHostServices};

use crate::{WebDocumentScrollService, WebScrollLockService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the selected strategy.
pub fn build_host_services(config: PageConfig) -> PageHostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => PageHostServices {
            scroll_lock: Rc::new(WebScrollLockService),
            document_scroll: Rc::new(WebDocumentScrollService),
            config,
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => PageHostServices::headless().with_config(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_select_headless_services() {
        let services = build_host_services(PageConfig::default());
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(host_strategy_name(), "headless");
        assert!(services.scroll_lock.set_scroll_locked(true).is_ok());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn headless_bundle_keeps_supplied_config() {
        let config = PageConfig {
            scroll_threshold_px: 32.0,
            ..PageConfig::default()
        };
        let services = build_host_services(config);
        assert_eq!(services.config, config);
    }
}
