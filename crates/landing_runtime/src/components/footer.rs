use landing_ui::{
    Button, Cluster, Grid, Heading, HeadingLevel, Icon, IconButton, IconName, IconSize,
    LayoutGap, LayoutJustify, Stack, Text, TextField, TextRole, TextTone,
};
use leptos::*;

use crate::catalog::{landing_content, NavLink};

/// Returns the copyright line for `year`.
pub fn copyright_line(year: u32, brand: &str) -> String {
    format!("\u{a9} {year} {brand}. All rights reserved.")
}

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        const SECONDS_PER_YEAR: u64 = 31_556_952;
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        1970 + u32::try_from(elapsed / SECONDS_PER_YEAR).unwrap_or_default()
    }
}

fn link_list(links: &'static [NavLink]) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href.as_str()>{link.label.as_str()}</a>
                </li>
            }
        })
        .collect_view()
}

#[component]
/// Page footer: brand blurb, link columns, newsletter signup, and legal links.
pub fn Footer() -> impl IntoView {
    let content = landing_content();
    let footer = &content.footer;

    view! {
        <footer class="landing-footer">
            <div class="ui-container">
                <Grid columns=4 gap=LayoutGap::Xl>
                    <Stack gap=LayoutGap::Md>
                        <a href="/" class="landing-brand">
                            <Icon icon=IconName::BookOpen size=IconSize::Lg />
                            <span>{content.brand.as_str()}</span>
                        </a>
                        <Text tone=TextTone::Muted>{content.tagline.as_str()}</Text>
                        <Cluster gap=LayoutGap::Sm>
                            {footer
                                .social
                                .iter()
                                .map(|social| {
                                    view! {
                                        <IconButton
                                            icon=social.icon_name()
                                            aria_label=social.label.as_str()
                                            icon_size=IconSize::Sm
                                        />
                                    }
                                })
                                .collect_view()}
                        </Cluster>
                    </Stack>

                    {footer
                        .columns
                        .iter()
                        .map(|column| {
                            view! {
                                <Stack gap=LayoutGap::Md>
                                    <Heading level=HeadingLevel::H3>
                                        {column.heading.as_str()}
                                    </Heading>
                                    <ul class="landing-footer__links">{link_list(&column.links)}</ul>
                                </Stack>
                            }
                        })
                        .collect_view()}

                    <Stack gap=LayoutGap::Md>
                        <Heading level=HeadingLevel::H3>{footer.newsletter_heading.as_str()}</Heading>
                        <Text tone=TextTone::Muted>{footer.newsletter_blurb.as_str()}</Text>
                        <Cluster gap=LayoutGap::Sm layout_class="landing-footer__newsletter">
                            <TextField
                                input_type="email"
                                placeholder=footer.newsletter_placeholder.as_str()
                                aria_label=footer.newsletter_placeholder.as_str()
                            />
                            <Button leading_icon=IconName::Mail>
                                {footer.newsletter_action.as_str()}
                            </Button>
                        </Cluster>
                    </Stack>
                </Grid>

                <Cluster
                    justify=LayoutJustify::Between
                    layout_class="landing-footer__bottom"
                >
                    <Text role=TextRole::Caption tone=TextTone::Muted>
                        {copyright_line(current_year(), &content.brand)}
                    </Text>
                    <ul class="landing-footer__legal">{link_list(&footer.legal)}</ul>
                </Cluster>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_line_names_year_and_brand() {
        assert_eq!(
            copyright_line(2026, "BookMates"),
            "\u{a9} 2026 BookMates. All rights reserved."
        );
    }

    #[test]
    fn current_year_is_after_epoch() {
        assert!(current_year() >= 2024);
    }
}
