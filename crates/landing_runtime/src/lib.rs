//! Landing page runtime: content catalog, page model, reducer, reveal and scroll-lock
//! registries, runtime provider, and page sections.
//!
//! Browser side effects go through the [`page_host`] contracts; this crate only decides *when*
//! they happen.

pub mod catalog;
pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod reducer;
pub mod reveal;
mod runtime_context;
pub mod scroll_lock;

pub use catalog::{featured_books, landing_content, LandingContent};
pub use components::{
    anchor_fragment, use_landing_runtime, BookCard, FeaturedBooks, Features, Footer, Hero,
    IndexPage, LandingProvider, LandingRuntimeContext, LandingSections, Navbar, Reveal,
    RevealDirection,
};
pub use host::LandingHostContext;
pub use model::{
    filter_books, format_price, Book, BookId, CardState, CardVariant, CategoryFilter,
    CategoryParseError, ListingKind,
};
pub use reducer::{
    reduce_page, CarouselDirection, PageAction, PageState, ReducerError, RuntimeEffect,
};
pub use reveal::RevealRegistry;
pub use scroll_lock::{ScrollLockGuard, ScrollLockRegistry};
