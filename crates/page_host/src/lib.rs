//! Typed host-domain contracts shared by the landing runtime and browser adapters.
//!
//! This crate is the API-first boundary for the few document-level side effects the landing page
//! performs: suspending background scrolling, smooth in-page anchor scrolling, and viewport
//! visibility samples. Concrete browser adapters live in `page_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod host;
pub mod scroll;
pub mod viewport;

pub use config::PageConfig;
pub use host::{HostStrategy, PageHostServices};
pub use scroll::{
    DocumentScrollService, MemoryDocumentScrollService, MemoryScrollLockService,
    NoopDocumentScrollService, NoopScrollLockService, ScrollLockService,
};
pub use viewport::{reveal_threshold_reached, RevealKey, ViewportSample, REVEAL_KEY_ATTRIBUTE};
