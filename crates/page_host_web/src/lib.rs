//! Browser (`wasm32`) implementations of [`page_host`] service contracts.
//!
//! Every adapter compiles on native targets as well; there the browser calls are replaced by
//! errors or no-ops so workspace tests can link the crate without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and host bundle factory.
pub mod adapters;
pub mod document_scroll;
pub mod scroll_lock;
pub mod viewport;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use document_scroll::WebDocumentScrollService;
pub use scroll_lock::WebScrollLockService;
pub use viewport::WebViewportObserver;
