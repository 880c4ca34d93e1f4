use landing_ui::{
    Button, ButtonShape, ButtonSize, ButtonVariant, Cluster, Heading, IconButton, IconName,
    LayoutAlign, LayoutGap, LayoutJustify, Section, Stack, SurfaceVariant, Text, TextRole,
    TextTone,
};
use leptos::*;

use super::{BookCard, Reveal};
use crate::{
    catalog::featured_books,
    model::{filter_books, Book, CategoryFilter},
    reducer::{CarouselDirection, PageAction},
    runtime_context::use_landing_runtime,
};

#[component]
/// Featured carousel with category tabs and paged horizontal scrolling.
pub fn FeaturedBooks() -> impl IntoView {
    let runtime = use_landing_runtime();
    let carousel = runtime.carousel;
    let active = Signal::derive(move || runtime.state.with(|state| state.active_category));
    let visible_books = move || filter_books(featured_books(), active.get());

    let page = move |direction: CarouselDirection| {
        let viewport_width = carousel
            .get_untracked()
            .map(|track| f64::from(track.client_width()))
            .unwrap_or_default();
        runtime.dispatch_action(PageAction::ScrollCarousel {
            direction,
            viewport_width,
        });
    };

    view! {
        <Section
            id="featured"
            variant=SurfaceVariant::Muted
            aria_label="Featured books"
            layout_class="landing-featured"
        >
            <Reveal>
                <Cluster
                    justify=LayoutJustify::Between
                    align=LayoutAlign::End
                    layout_class="landing-featured__header"
                >
                    <Stack gap=LayoutGap::Sm>
                        <Heading>"Featured Books"</Heading>
                        <Text role=TextRole::Lede tone=TextTone::Muted>
                            "Discover books from our community"
                        </Text>
                    </Stack>
                    <Cluster gap=LayoutGap::Sm>
                        <IconButton
                            icon=IconName::ChevronLeft
                            aria_label="Scroll left"
                            variant=ButtonVariant::Outline
                            shape=ButtonShape::Circle
                            on_click=Callback::new(move |_| page(CarouselDirection::Left))
                        />
                        <IconButton
                            icon=IconName::ChevronRight
                            aria_label="Scroll right"
                            variant=ButtonVariant::Outline
                            shape=ButtonShape::Circle
                            on_click=Callback::new(move |_| page(CarouselDirection::Right))
                        />
                    </Cluster>
                </Cluster>
            </Reveal>

            <Cluster gap=LayoutGap::Sm layout_class="landing-featured__filters">
                {CategoryFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let selected = Signal::derive(move || active.get() == filter);
                        view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                shape=ButtonShape::Pill
                                selected=selected
                                aria_pressed=selected
                                ui_slot=filter.id()
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(PageAction::SelectCategory(filter))
                                })
                            >
                                {filter.name()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Cluster>

            <div class="landing-featured__track" node_ref=carousel>
                <For
                    each=visible_books
                    key=|book: &Book| book.id.clone()
                    children=move |book: Book| {
                        view! {
                            <div class="landing-featured__slot">
                                <BookCard book=book />
                            </div>
                        }
                    }
                />
            </div>
        </Section>
    }
}
