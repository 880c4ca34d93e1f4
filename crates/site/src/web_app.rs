use landing_runtime::IndexPage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use page_host::PageConfig;
use page_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="BookMates" />
        <Meta
            name="description"
            content="Sell, exchange, and donate books with a community of readers."
        />

        <Router>
            <Routes>
                <Route path="" view=IndexRoute />
                <Route path="/*any" view=NotFoundRoute />
            </Routes>
        </Router>
    }
}

#[component]
pub fn IndexRoute() -> impl IntoView {
    view! { <IndexPage host_services=build_host_services(PageConfig::default()) /> }
}

#[component]
pub fn NotFoundRoute() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <section class="placeholder-route">
            <h1>"Coming soon"</h1>
            <p>{move || format!("{} is not part of the landing preview yet.", path())}</p>
            <A href="/">"Back to BookMates"</A>
        </section>
    }
}
