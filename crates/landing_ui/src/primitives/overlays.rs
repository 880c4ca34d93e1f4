use super::*;

#[component]
/// Full-screen slide-in drawer; hidden content stays mounted so the slide can animate.
pub fn Drawer(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-drawer", layout_class)
            id=id
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            aria-hidden=move || bool_token(!open.get())
            data-ui-primitive="true"
            data-ui-kind="drawer"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            {children()}
        </div>
    }
}
