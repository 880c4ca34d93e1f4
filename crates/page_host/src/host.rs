//! Host-bundle model injected into the landing runtime by the entry layer.

use std::rc::Rc;

use crate::{
    DocumentScrollService, NoopDocumentScrollService, NoopScrollLockService, PageConfig,
    ScrollLockService,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services.
    Browser,
    /// Placeholder services for non-browser targets and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Environment-specific service selection happens before this bundle reaches
/// `landing_runtime`, keeping page logic free of browser adapter types.
#[derive(Clone)]
pub struct PageHostServices {
    /// Document scroll-lock service used by overlays.
    pub scroll_lock: Rc<dyn ScrollLockService>,
    /// In-page anchor scrolling service.
    pub document_scroll: Rc<dyn DocumentScrollService>,
    /// Interaction tuning.
    pub config: PageConfig,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl PageHostServices {
    /// Builds a headless bundle whose services perform no document writes.
    pub fn headless() -> Self {
        Self {
            scroll_lock: Rc::new(NoopScrollLockService),
            document_scroll: Rc::new(NoopDocumentScrollService),
            config: PageConfig::default(),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Returns a copy of the bundle using `config`.
    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for PageHostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHostServices")
            .field("config", &self.config)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
