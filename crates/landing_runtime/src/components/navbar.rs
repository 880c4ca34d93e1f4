use landing_ui::{
    Button, ButtonSize, ButtonVariant, Cluster, Drawer, Icon, IconButton, IconName, IconSize,
    LayoutGap, Stack,
};
use leptos::ev::MouseEvent;
use leptos::*;

use crate::{
    catalog::landing_content,
    reducer::{is_past_scroll_threshold, PageAction},
    runtime_context::use_landing_runtime,
};

const MOBILE_MENU_ID: &str = "landing-mobile-menu";

#[component]
/// Fixed top navigation with a scroll-aware backdrop and a scroll-locking mobile drawer.
pub fn Navbar() -> impl IntoView {
    let runtime = use_landing_runtime();
    let content = landing_content();
    let threshold_px = runtime
        .host
        .with_value(|host| host.config().scroll_threshold_px);

    // Dispatch only when the threshold crossing flips; every other scroll event is dropped here.
    let sync_scroll_state = move || {
        let offset_y = window().scroll_y().unwrap_or(0.0);
        let past = is_past_scroll_threshold(offset_y, threshold_px);
        if past != runtime.state.with_untracked(|state| state.scrolled) {
            runtime.dispatch_action(PageAction::ScrollOffsetChanged { offset_y });
        }
    };
    sync_scroll_state();

    let scroll_listener = window_event_listener(ev::scroll, move |_| sync_scroll_state());
    on_cleanup(move || scroll_listener.remove());
    on_cleanup(move || runtime.release_mobile_menu());

    let scrolled = move || runtime.state.with(|state| state.scrolled);
    let menu_open = Signal::derive(move || runtime.state.with(|state| state.mobile_menu_open));
    let toggle_menu =
        Callback::new(move |_: MouseEvent| runtime.dispatch_action(PageAction::ToggleMobileMenu));
    let close_menu =
        Callback::new(move |_: MouseEvent| runtime.dispatch_action(PageAction::CloseMobileMenu));

    view! {
        <header class="landing-navbar" class:is-scrolled=scrolled>
            <nav class="ui-container landing-navbar__inner" aria-label="Primary">
                <a href="/" class="landing-brand">
                    <Icon icon=IconName::BookOpen size=IconSize::Lg />
                    <span>{content.brand.as_str()}</span>
                </a>

                <ul class="landing-navbar__links">
                    {content
                        .nav_links
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href.as_str()>{link.label.as_str()}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <Cluster gap=LayoutGap::Sm layout_class="landing-navbar__actions">
                    <IconButton icon=IconName::Search aria_label="Search" />
                    <IconButton icon=IconName::Bell aria_label="Notifications" />
                    <IconButton icon=IconName::MessageSquare aria_label="Messages" />
                    <IconButton icon=IconName::User aria_label="Profile" />
                    <Button size=ButtonSize::Sm>"Sign In"</Button>
                </Cluster>

                {move || {
                    let (icon, label) = if menu_open.get() {
                        (IconName::Close, "Close menu")
                    } else {
                        (IconName::Menu, "Open menu")
                    };
                    view! {
                        <IconButton
                            icon
                            aria_label=label
                            aria_expanded=menu_open
                            layout_class="landing-navbar__toggle"
                            on_click=toggle_menu
                        />
                    }
                }}
            </nav>

            <Drawer
                open=menu_open
                id=MOBILE_MENU_ID
                aria_label="Mobile navigation"
                layout_class="landing-mobile-menu"
            >
                <Stack gap=LayoutGap::Lg>
                    <ul class="landing-mobile-menu__links">
                        {content
                            .nav_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href.as_str()
                                            on:click=move |ev| close_menu.call(ev)
                                        >
                                            {link.label.as_str()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <Stack gap=LayoutGap::Sm>
                        <Button
                            variant=ButtonVariant::Outline
                            leading_icon=IconName::Search
                            on_click=close_menu
                        >
                            "Search"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            leading_icon=IconName::MessageSquare
                            on_click=close_menu
                        >
                            "Messages"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            leading_icon=IconName::User
                            on_click=close_menu
                        >
                            "Profile"
                        </Button>
                        <Button on_click=close_menu>"Sign In"</Button>
                    </Stack>
                </Stack>
            </Drawer>
        </header>
    }
}
