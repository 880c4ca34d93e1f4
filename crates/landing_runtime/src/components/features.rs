use landing_ui::{
    Card, Grid, Heading, HeadingLevel, Icon, IconSize, LayoutAlign, LayoutGap, LayoutPadding,
    Section, Stack, Text, TextRole, TextTone,
};
use leptos::*;

use super::{stagger_delay_ms, Reveal};
use crate::catalog::landing_content;

#[component]
/// Feature highlight grid.
pub fn Features() -> impl IntoView {
    let features = &landing_content().features;

    view! {
        <Section id="features" aria_label="Features" layout_class="landing-features">
            <Reveal>
                <Stack
                    gap=LayoutGap::Md
                    align=LayoutAlign::Center
                    layout_class="landing-features__header"
                >
                    <Heading>{features.heading.as_str()}</Heading>
                    <Text role=TextRole::Lede tone=TextTone::Muted>
                        {features.lede.as_str()}
                    </Text>
                </Stack>
            </Reveal>
            <Grid columns=4>
                {features
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        view! {
                            <Reveal delay_ms=stagger_delay_ms(index)>
                                <Card padding=LayoutPadding::Lg layout_class="landing-feature-card">
                                    <Stack gap=LayoutGap::Md align=LayoutAlign::Start>
                                        <span class="landing-feature-card__icon">
                                            <Icon icon=feature.icon_name() size=IconSize::Lg />
                                        </span>
                                        <Heading level=HeadingLevel::H3>
                                            {feature.title.as_str()}
                                        </Heading>
                                        <Text tone=TextTone::Muted>
                                            {feature.description.as_str()}
                                        </Text>
                                    </Stack>
                                </Card>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </Grid>
        </Section>
    }
}
