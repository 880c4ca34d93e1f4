//! Built-in landing content compiled from `content/landing.toml`.
//!
//! `build.rs` validates the TOML source and embeds it as JSON; this module parses it once on first
//! use. The catalog is sample content, not runtime configuration.

use std::sync::OnceLock;

use landing_ui::IconName;
use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::model::Book;

include!(concat!(env!("OUT_DIR"), "/landing_content_generated.rs"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Whole-page content catalog.
pub struct LandingContent {
    /// Content schema version checked at build time.
    pub schema_version: u32,
    /// Brand name shown in the navbar and footer.
    pub brand: String,
    /// Footer brand blurb.
    pub tagline: String,
    /// Hero section copy.
    pub hero: HeroContent,
    /// Featured carousel entries in display order.
    pub books: Vec<Book>,
    /// Feature grid copy.
    pub features: FeatureSection,
    /// Primary navigation links.
    pub nav_links: Vec<NavLink>,
    /// Footer copy and link columns.
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Hero section copy.
pub struct HeroContent {
    /// Pill badge above the headline.
    pub badge: String,
    /// Headline lead-in.
    pub headline: String,
    /// Accented headline tail.
    pub headline_accent: String,
    /// Supporting paragraph.
    pub lede: String,
    /// Primary call-to-action label.
    pub primary_cta: String,
    /// Primary call-to-action target.
    pub primary_href: String,
    /// Secondary call-to-action label.
    pub secondary_cta: String,
    /// Secondary call-to-action target.
    pub secondary_href: String,
    /// Showcase image URL.
    pub image: String,
    /// Showcase image alt text.
    pub image_alt: String,
    /// Small caption above the showcase title.
    pub image_kicker: String,
    /// Showcase title.
    pub image_title: String,
    /// Community statistics row.
    pub stats: Vec<HeroStat>,
    /// Cards floating around the showcase image.
    pub floating_cards: Vec<FloatingCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One headline statistic.
pub struct HeroStat {
    /// Display value such as "10k+".
    pub value: String,
    /// Caption.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Floating stat card next to the hero image.
pub struct FloatingCard {
    /// Icon token.
    pub icon: String,
    /// Caption.
    pub label: String,
    /// Display value.
    pub value: String,
}

impl FloatingCard {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        resolve_icon(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Feature grid copy.
pub struct FeatureSection {
    /// Section heading.
    pub heading: String,
    /// Section lede.
    pub lede: String,
    /// Feature cards in display order.
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One feature highlight.
pub struct Feature {
    /// Icon token.
    pub icon: String,
    /// Card title.
    pub title: String,
    /// Card body.
    pub description: String,
}

impl Feature {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        resolve_icon(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Labeled link.
pub struct NavLink {
    /// Link text.
    pub label: String,
    /// Target URL or in-page fragment.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Footer link column.
pub struct FooterColumn {
    /// Column heading.
    pub heading: String,
    /// Column links.
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Social profile button.
pub struct SocialLink {
    /// Icon token.
    pub icon: String,
    /// Accessible label.
    pub label: String,
}

impl SocialLink {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        resolve_icon(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Footer copy.
pub struct FooterContent {
    /// Newsletter column heading.
    pub newsletter_heading: String,
    /// Newsletter pitch.
    pub newsletter_blurb: String,
    /// Email field placeholder.
    pub newsletter_placeholder: String,
    /// Subscribe button label.
    pub newsletter_action: String,
    /// Link columns.
    pub columns: Vec<FooterColumn>,
    /// Legal links in the bottom bar.
    pub legal: Vec<NavLink>,
    /// Social profile buttons.
    pub social: Vec<SocialLink>,
}

/// Returns the built-in landing content.
pub fn landing_content() -> &'static LandingContent {
    static CATALOG: OnceLock<LandingContent> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(LANDING_CONTENT_JSON)
            .expect("generated landing content catalog should parse")
    })
}

/// Returns the featured carousel entries in catalog order.
pub fn featured_books() -> &'static [Book] {
    &landing_content().books
}

/// Resolves a content icon token, falling back to the brand glyph.
pub fn resolve_icon(token: &str) -> IconName {
    IconName::from_token(token).unwrap_or_else(|| {
        logging::debug_warn!("unknown icon token `{token}` in landing content");
        IconName::BookOpen
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::model::ListingKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_has_six_books_with_unique_ids() {
        let books = featured_books();
        assert_eq!(books.len(), 6);
        let ids = books.iter().map(|book| book.id.0.as_str()).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn catalog_kind_sequence_matches_featured_order() {
        let kinds = featured_books()
            .iter()
            .map(|book| book.kind.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                ListingKind::Sell,
                ListingKind::Exchange,
                ListingKind::Donate,
                ListingKind::Sell,
                ListingKind::Wishlist,
                ListingKind::Exchange,
            ]
        );
    }

    #[test]
    fn only_sale_listings_carry_prices() {
        for book in featured_books() {
            if book.price.is_some() {
                assert_eq!(book.kind, ListingKind::Sell, "{}", book.id);
            }
        }
        assert_eq!(featured_books()[0].price_label().as_deref(), Some("$12.99"));
    }

    #[test]
    fn every_content_icon_token_resolves() {
        let content = landing_content();
        let tokens = content
            .features
            .items
            .iter()
            .map(|feature| feature.icon.as_str())
            .chain(content.hero.floating_cards.iter().map(|card| card.icon.as_str()))
            .chain(content.footer.social.iter().map(|link| link.icon.as_str()));
        for token in tokens {
            assert!(IconName::from_token(token).is_some(), "unknown icon `{token}`");
        }
    }

    #[test]
    fn section_counts_match_page_layout() {
        let content = landing_content();
        assert_eq!(content.features.items.len(), 8);
        assert_eq!(content.hero.stats.len(), 3);
        assert_eq!(
            content
                .nav_links
                .iter()
                .map(|link| link.href.as_str())
                .collect::<Vec<_>>(),
            vec!["/", "/explore", "/donate", "/about"]
        );
        assert_eq!(content.footer.columns.len(), 2);
    }
}
