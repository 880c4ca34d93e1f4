use landing_ui::{
    Badge, BadgeTone, Button, ButtonShape, ButtonSize, ButtonVariant, Card, Cluster, Heading,
    HeadingLevel, IconButton, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, Stack, Text, TextRole, TextTone,
};
use leptos::*;

use crate::model::{Book, CardState, CardVariant};

#[component]
/// One catalog entry with a local like toggle.
///
/// The like state belongs to this mount only and is never written back to the catalog.
pub fn BookCard(
    book: Book,
    #[prop(default = CardVariant::Grid)] variant: CardVariant,
) -> impl IntoView {
    let card = create_rw_signal(CardState::for_book(&book));
    let liked = Signal::derive(move || card.with(|state| state.liked));
    let like_label = Signal::derive(move || {
        let label = if liked.get() { "Unlike" } else { "Like" };
        label.to_string()
    });
    let toggle_like = Callback::new(move |_: ev::MouseEvent| card.update(CardState::toggle_like));

    let like_button = move || {
        view! {
            <IconButton
                icon=IconName::Heart
                aria_label=like_label
                pressed=liked
                filled=liked
                ui_slot="like"
                on_click=toggle_like
            />
        }
    };

    let Book {
        title,
        author,
        cover,
        kind,
        condition,
        category,
        ..
    } = book.clone();
    let price = book.price_label();
    let badge = view! { <Badge tone=kind.tone()>{kind.label().to_string()}</Badge> };

    match variant {
        CardVariant::Horizontal => view! {
            <div class="landing-book-card" data-variant=variant.token()>
                <Card layout_class="landing-book-card__row">
                    <img class="landing-book-card__thumb" src=cover alt=title.clone() loading="lazy" />
                    <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md>
                        {badge}
                        <Heading level=HeadingLevel::H3>{title}</Heading>
                        <Text tone=TextTone::Muted>{author}</Text>
                        {price.map(|price| view! { <Text role=TextRole::Metric>{price}</Text> })}
                        {book
                            .condition_line()
                            .map(|line| view! { <Text role=TextRole::Caption tone=TextTone::Muted>{line}</Text> })}
                        <Cluster gap=LayoutGap::Sm>
                            {like_button}
                            <IconButton icon=IconName::MessageSquare aria_label="Message" />
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm>
                                "Details"
                            </Button>
                        </Cluster>
                    </Stack>
                </Card>
            </div>
        }
        .into_view(),
        CardVariant::Grid => {
            let overlay_open = move || card.with(|state| state.overlay_visible(variant));
            view! {
                <div
                    class="landing-book-card"
                    data-variant=variant.token()
                    on:mouseenter=move |_| card.update(|state| state.hovered = true)
                    on:mouseleave=move |_| card.update(|state| state.hovered = false)
                >
                    <Card>
                        <div class="landing-book-card__cover">
                            <img src=cover alt=title.clone() loading="lazy" />
                            <div class="landing-book-card__badge">{badge}</div>
                            {like_button}
                            <div
                                class="landing-book-card__overlay"
                                data-ui-state=move || if overlay_open() { "open" } else { "closed" }
                                aria-hidden=move || if overlay_open() { "false" } else { "true" }
                            >
                                <Stack gap=LayoutGap::Sm>
                                    {price.map(|price| view! { <Text role=TextRole::Metric tone=TextTone::Inverse>{price}</Text> })}
                                    {condition.map(|condition| view! { <Text role=TextRole::Caption tone=TextTone::Inverse>{condition}</Text> })}
                                    <Cluster gap=LayoutGap::Sm>
                                        <IconButton
                                            icon=IconName::MessageSquare
                                            aria_label="Message"
                                            variant=ButtonVariant::Secondary
                                            shape=ButtonShape::Circle
                                            icon_size=IconSize::Sm
                                        />
                                        <IconButton
                                            icon=IconName::Share
                                            aria_label="Share"
                                            variant=ButtonVariant::Secondary
                                            shape=ButtonShape::Circle
                                            icon_size=IconSize::Sm
                                        />
                                    </Cluster>
                                </Stack>
                            </div>
                        </div>
                        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md>
                            {category.map(|category| view! { <Badge tone=BadgeTone::Neutral>{category}</Badge> })}
                            <Heading level=HeadingLevel::H3>{title}</Heading>
                            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Center>
                                <Text tone=TextTone::Muted>{author}</Text>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Sm
                                    trailing_icon=IconName::ArrowRight
                                >
                                    "Details"
                                </Button>
                            </Cluster>
                        </Stack>
                    </Card>
                </div>
            }
            .into_view()
        }
    }
}
