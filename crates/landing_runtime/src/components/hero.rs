use landing_ui::{
    Badge, BadgeTone, ButtonSize, ButtonVariant, Card, Cluster, Elevation, Heading, HeadingLevel,
    Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutPadding, LinkButton, Section, Stack,
    Text, TextRole, TextTone,
};
use leptos::*;

use super::{stagger_delay_ms, Reveal, RevealDirection};
use crate::catalog::landing_content;

#[component]
/// Opening section: pitch, calls to action, community stats, and the showcase image.
pub fn Hero() -> impl IntoView {
    let hero = &landing_content().hero;

    view! {
        <Section id="hero" aria_label="Introduction" layout_class="landing-hero">
            <div class="landing-hero__grid">
                <Stack gap=LayoutGap::Lg align=LayoutAlign::Start layout_class="landing-hero__copy">
                    <Reveal delay_ms=stagger_delay_ms(0)>
                        <Badge tone=BadgeTone::Accent>{hero.badge.as_str()}</Badge>
                    </Reveal>
                    <Reveal delay_ms=stagger_delay_ms(1)>
                        <Heading level=HeadingLevel::H1>
                            {hero.headline.as_str()}
                            " "
                            <span class="landing-accent">{hero.headline_accent.as_str()}</span>
                        </Heading>
                    </Reveal>
                    <Reveal delay_ms=stagger_delay_ms(2)>
                        <Text role=TextRole::Lede tone=TextTone::Muted>
                            {hero.lede.as_str()}
                        </Text>
                    </Reveal>
                    <Reveal delay_ms=stagger_delay_ms(3)>
                        <Cluster gap=LayoutGap::Md>
                            <LinkButton
                                href=hero.primary_href.as_str()
                                size=ButtonSize::Lg
                                trailing_icon=IconName::ArrowRight
                            >
                                {hero.primary_cta.as_str()}
                            </LinkButton>
                            <LinkButton
                                href=hero.secondary_href.as_str()
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Lg
                            >
                                {hero.secondary_cta.as_str()}
                            </LinkButton>
                        </Cluster>
                    </Reveal>
                    <Reveal delay_ms=stagger_delay_ms(4)>
                        <Cluster gap=LayoutGap::Xl layout_class="landing-hero__stats">
                            {hero
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <Stack gap=LayoutGap::None>
                                            <Text role=TextRole::Metric>{stat.value.as_str()}</Text>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                                {stat.label.as_str()}
                                            </Text>
                                        </Stack>
                                    }
                                })
                                .collect_view()}
                        </Cluster>
                    </Reveal>
                </Stack>

                <Reveal
                    direction=RevealDirection::Right
                    delay_ms=stagger_delay_ms(2)
                    layout_class="landing-hero__showcase"
                >
                    <div class="landing-hero__image">
                        <img src=hero.image.as_str() alt=hero.image_alt.as_str() loading="eager" />
                        <div class="landing-hero__caption">
                            <Text role=TextRole::Caption tone=TextTone::Inverse>
                                {hero.image_kicker.as_str()}
                            </Text>
                            <Heading level=HeadingLevel::H3 tone=TextTone::Inverse>
                                {hero.image_title.as_str()}
                            </Heading>
                        </div>
                    </div>
                    {hero
                        .floating_cards
                        .iter()
                        .map(|card| {
                            view! {
                                <Card
                                    elevation=Elevation::Overlay
                                    padding=LayoutPadding::Sm
                                    layout_class="landing-floating-card"
                                >
                                    <Cluster gap=LayoutGap::Sm>
                                        <span class="landing-floating-card__icon">
                                            <Icon icon=card.icon_name() size=IconSize::Md />
                                        </span>
                                        <Stack gap=LayoutGap::None>
                                            <Text role=TextRole::Caption tone=TextTone::Muted>
                                                {card.label.as_str()}
                                            </Text>
                                            <Text role=TextRole::Metric>{card.value.as_str()}</Text>
                                        </Stack>
                                    </Cluster>
                                </Card>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </Section>
    }
}
