//! Landing page UI composition and interaction surfaces.

mod book_card;
mod featured_books;
mod features;
mod footer;
mod hero;
mod navbar;

use std::{cell::Cell, rc::Rc};

use leptos::{html::Div, *};
use page_host::{PageHostServices, RevealKey};
use wasm_bindgen::JsCast;

pub use self::{
    book_card::BookCard, featured_books::FeaturedBooks, features::Features, footer::Footer,
    hero::Hero, navbar::Navbar,
};
pub use crate::runtime_context::{use_landing_runtime, LandingProvider, LandingRuntimeContext};

const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^='#']";
const STAGGER_STEP_MS: u32 = 100;

/// Returns the target id of an in-page anchor `href`; a bare `#` has none.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

/// Transition delay for the `index`-th item of a staggered group.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_mul(STAGGER_STEP_MS))
}

fn clicked_in_page_anchor(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest(IN_PAGE_ANCHOR_SELECTOR).ok()??;
    anchor.get_attribute("href")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Entry direction of a [`Reveal`] block.
pub enum RevealDirection {
    /// Slides up into place.
    #[default]
    Bottom,
    /// Slides in from the left.
    Left,
    /// Slides in from the right.
    Right,
}

impl RevealDirection {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[component]
/// Block that animates in the first time it scrolls into view.
///
/// Registers with the page provider's reveal registry on mount and deregisters on unmount.
pub fn Reveal(
    #[prop(default = 0)] delay_ms: u32,
    #[prop(default = RevealDirection::Bottom)] direction: RevealDirection,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let runtime = use_landing_runtime();
    let node_ref = create_node_ref::<Div>();
    let key = create_rw_signal(None::<RevealKey>);
    let registration = Rc::new(Cell::new(None::<RevealKey>));

    node_ref.on_load({
        let registration = Rc::clone(&registration);
        move |element| {
            let element: &web_sys::Element = &element;
            let registered = runtime.register_reveal(element.clone());
            registration.set(Some(registered));
            key.set(Some(registered));
        }
    });
    on_cleanup(move || {
        if let Some(registered) = registration.take() {
            runtime.deregister_reveal(registered);
        }
    });

    let revealed = move || key.get().is_some_and(|key| runtime.is_revealed(key));
    let class = match layout_class {
        Some(extra) => format!("reveal reveal-{} {extra}", direction.token()),
        None => format!("reveal reveal-{}", direction.token()),
    };
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div node_ref=node_ref class=class class:revealed=revealed style=style>
            {children()}
        </div>
    }
}

#[component]
/// Landing page sections in page order; requires a surrounding [`LandingProvider`].
pub fn LandingSections() -> impl IntoView {
    let runtime = use_landing_runtime();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(href) = clicked_in_page_anchor(&ev) else {
            return;
        };
        ev.prevent_default();
        if let Some(fragment) = anchor_fragment(&href) {
            runtime.scroll_to_anchor(fragment);
        }
    };

    view! {
        <div class="landing-page" on:click=on_click>
            <Navbar />
            <main>
                <Hero />
                <FeaturedBooks />
                <Features />
            </main>
            <Footer />
        </div>
    }
}

#[component]
/// Index page: the landing sections inside their own page provider.
pub fn IndexPage(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: PageHostServices,
) -> impl IntoView {
    view! {
        <LandingProvider host_services=host_services>
            <LandingSections />
        </LandingProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_hash_has_no_fragment() {
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment("#features"), Some("features"));
        assert_eq!(anchor_fragment("/about"), None);
    }

    #[test]
    fn stagger_steps_by_one_hundred_ms() {
        let delays = (0..4).map(stagger_delay_ms).collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn reveal_direction_tokens() {
        assert_eq!(RevealDirection::default().token(), "bottom");
        assert_eq!(RevealDirection::Right.token(), "right");
    }
}
