//! Catalog and view-state models for the landing page.

use std::{fmt, str::FromStr};

use landing_ui::BadgeTone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable identifier of a catalog entry.
pub struct BookId(pub String);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Transaction type of a catalog entry.
///
/// Unrecognized wire tokens are preserved in [`ListingKind::Other`] instead of failing to parse.
pub enum ListingKind {
    /// Offered for sale (`sell`).
    Sell,
    /// Offered for a swap (`exchange`).
    Exchange,
    /// Given away (`donate`).
    Donate,
    /// Wanted by the lister (`wishlist`).
    Wishlist,
    /// Any other token, kept verbatim.
    Other(String),
}

impl ListingKind {
    /// Maps a wire token to a listing kind.
    pub fn from_token(token: &str) -> Self {
        match token {
            "sell" => Self::Sell,
            "exchange" => Self::Exchange,
            "donate" => Self::Donate,
            "wishlist" => Self::Wishlist,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire token.
    pub fn token(&self) -> &str {
        match self {
            Self::Sell => "sell",
            Self::Exchange => "exchange",
            Self::Donate => "donate",
            Self::Wishlist => "wishlist",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the badge label shown on cards; unknown kinds echo their raw token.
    pub fn label(&self) -> &str {
        match self {
            Self::Sell => "For Sale",
            Self::Exchange => "Exchange",
            Self::Donate => "Donation",
            Self::Wishlist => "Wanted",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the badge tone shown on cards.
    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Sell => BadgeTone::Info,
            Self::Exchange => BadgeTone::Accent,
            Self::Donate => BadgeTone::Success,
            Self::Wishlist => BadgeTone::Warning,
            Self::Other(_) => BadgeTone::Neutral,
        }
    }
}

impl From<String> for ListingKind {
    fn from(value: String) -> Self {
        Self::from_token(&value)
    }
}

impl From<ListingKind> for String {
    fn from(value: ListingKind) -> Self {
        value.token().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One catalog entry shown in the featured carousel.
pub struct Book {
    /// Unique identifier.
    pub id: BookId,
    /// Title line.
    pub title: String,
    /// Author line.
    pub author: String,
    /// Remote cover image URL.
    pub cover: String,
    /// Listing kind.
    pub kind: ListingKind,
    /// Asking price; only meaningful for [`ListingKind::Sell`].
    #[serde(default)]
    pub price: Option<f64>,
    /// Condition label such as "Like New".
    #[serde(default)]
    pub condition: Option<String>,
    /// Genre label.
    #[serde(default)]
    pub category: Option<String>,
    /// Initial liked flag for the card.
    #[serde(default)]
    pub liked: Option<bool>,
}

impl Book {
    /// Returns the formatted price when this is a priced sale listing.
    pub fn price_label(&self) -> Option<String> {
        match (&self.kind, self.price) {
            (ListingKind::Sell, Some(price)) => Some(format_price(price)),
            _ => None,
        }
    }

    /// Returns the initial liked state; absent means not liked.
    pub fn initially_liked(&self) -> bool {
        self.liked.unwrap_or(false)
    }

    /// Returns the horizontal-row condition line.
    pub fn condition_line(&self) -> Option<String> {
        self.condition
            .as_deref()
            .map(|condition| format!("Condition: {condition}"))
    }
}

/// Formats a price with a `$` prefix and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Active category selector of the featured carousel.
pub enum CategoryFilter {
    /// Every listing.
    #[default]
    All,
    /// Sale listings only.
    Sell,
    /// Exchange listings only.
    Exchange,
    /// Donations only.
    Donate,
    /// Wanted listings only.
    Wishlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Error returned when parsing a [`CategoryFilter`] id.
pub enum CategoryParseError {
    /// The id names no known category.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

impl CategoryFilter {
    /// Filter tabs in display order.
    pub const ALL: [CategoryFilter; 5] = [
        Self::All,
        Self::Sell,
        Self::Exchange,
        Self::Donate,
        Self::Wishlist,
    ];

    /// Stable id used in markup and parsing.
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sell => "sell",
            Self::Exchange => "exchange",
            Self::Donate => "donate",
            Self::Wishlist => "wishlist",
        }
    }

    /// Tab label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All Books",
            Self::Sell => "For Sale",
            Self::Exchange => "Exchange",
            Self::Donate => "Donations",
            Self::Wishlist => "Wishlist",
        }
    }

    /// Returns whether a listing of `kind` is shown under this filter.
    pub fn matches(self, kind: &ListingKind) -> bool {
        match self {
            Self::All => true,
            Self::Sell => *kind == ListingKind::Sell,
            Self::Exchange => *kind == ListingKind::Exchange,
            Self::Donate => *kind == ListingKind::Donate,
            Self::Wishlist => *kind == ListingKind::Wishlist,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.id() == raw)
            .ok_or_else(|| CategoryParseError::UnknownCategory(raw.to_string()))
    }
}

/// Returns the listings visible under `filter`, keeping catalog order.
pub fn filter_books(books: &[Book], filter: CategoryFilter) -> Vec<Book> {
    books
        .iter()
        .filter(|book| filter.matches(&book.kind))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card layout.
pub enum CardVariant {
    /// Cover-first tile with a hover overlay.
    #[default]
    Grid,
    /// Compact row with details always visible.
    Horizontal,
}

impl CardVariant {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-mount interaction state of one card.
pub struct CardState {
    /// Local liked toggle.
    pub liked: bool,
    /// Pointer is over the card.
    pub hovered: bool,
}

impl CardState {
    /// Seeds card state from the catalog entry.
    pub fn for_book(book: &Book) -> Self {
        Self {
            liked: book.initially_liked(),
            hovered: false,
        }
    }

    /// Flips the liked flag.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Returns whether the detail overlay is shown for `variant`.
    pub fn overlay_visible(&self, variant: CardVariant) -> bool {
        variant == CardVariant::Grid && self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book(id: &str, kind: &str, price: Option<f64>) -> Book {
        Book {
            id: BookId(id.to_string()),
            title: format!("Title {id}"),
            author: "Author".to_string(),
            cover: "https://example.com/cover.jpg".to_string(),
            kind: ListingKind::from_token(kind),
            price,
            condition: None,
            category: None,
            liked: None,
        }
    }

    fn sample_catalog() -> Vec<Book> {
        ["sell", "exchange", "donate", "sell", "wishlist", "exchange"]
            .into_iter()
            .enumerate()
            .map(|(idx, kind)| book(&(idx + 1).to_string(), kind, None))
            .collect()
    }

    #[test]
    fn price_is_hidden_for_non_sale_kinds() {
        for kind in ["exchange", "donate", "wishlist", "auction"] {
            assert_eq!(book("1", kind, Some(4.5)).price_label(), None, "{kind}");
        }
        assert_eq!(book("1", "sell", None).price_label(), None);
    }

    #[test]
    fn price_uses_two_decimals() {
        assert_eq!(
            book("1", "sell", Some(12.9)).price_label().as_deref(),
            Some("$12.90")
        );
        assert_eq!(
            book("1", "sell", Some(12.99)).price_label().as_deref(),
            Some("$12.99")
        );
        assert_eq!(book("1", "sell", Some(0.0)).price_label().as_deref(), Some("$0.00"));
    }

    #[test]
    fn listing_kind_labels_and_tones() {
        let cases = [
            ("sell", "For Sale", BadgeTone::Info),
            ("exchange", "Exchange", BadgeTone::Accent),
            ("donate", "Donation", BadgeTone::Success),
            ("wishlist", "Wanted", BadgeTone::Warning),
            ("auction", "auction", BadgeTone::Neutral),
        ];
        for (token, label, tone) in cases {
            let kind = ListingKind::from_token(token);
            assert_eq!(kind.label(), label);
            assert_eq!(kind.tone(), tone);
            assert_eq!(kind.token(), token);
        }
    }

    #[test]
    fn unknown_kind_deserializes_verbatim() {
        let parsed: ListingKind = serde_json::from_str("\"Barter\"").expect("parse kind");
        assert_eq!(parsed, ListingKind::Other("Barter".to_string()));
        assert_eq!(
            serde_json::to_string(&ListingKind::Donate).expect("serialize kind"),
            "\"donate\""
        );
    }

    #[test]
    fn exchange_filter_keeps_catalog_order() {
        let books = sample_catalog();
        let ids = |items: Vec<Book>| items.into_iter().map(|b| b.id.0).collect::<Vec<_>>();

        assert_eq!(ids(filter_books(&books, CategoryFilter::Exchange)), vec!["2", "6"]);
        assert_eq!(
            ids(filter_books(&books, CategoryFilter::All)),
            vec!["1", "2", "3", "4", "5", "6"]
        );
        assert_eq!(ids(filter_books(&books, CategoryFilter::Sell)), vec!["1", "4"]);
    }

    #[test]
    fn other_kinds_only_show_under_all() {
        let books = vec![book("9", "auction", None)];
        assert_eq!(filter_books(&books, CategoryFilter::All).len(), 1);
        for filter in &CategoryFilter::ALL[1..] {
            assert!(filter_books(&books, *filter).is_empty());
        }
    }

    #[test]
    fn category_ids_parse() {
        for filter in CategoryFilter::ALL {
            assert_eq!(filter.id().parse::<CategoryFilter>(), Ok(filter));
        }
        assert_eq!(
            "poetry".parse::<CategoryFilter>(),
            Err(CategoryParseError::UnknownCategory("poetry".to_string()))
        );
        assert_eq!(CategoryFilter::Donate.name(), "Donations");
    }

    #[test]
    fn like_toggle_twice_restores_state() {
        let mut liked = book("1", "sell", None);
        liked.liked = Some(true);

        for source in [book("2", "sell", None), liked] {
            let mut state = CardState::for_book(&source);
            let initial = state.liked;
            state.toggle_like();
            assert_ne!(state.liked, initial);
            state.toggle_like();
            assert_eq!(state.liked, initial);
            assert_eq!(source.initially_liked(), initial);
        }
    }

    #[test]
    fn overlay_only_on_hovered_grid_cards() {
        let mut state = CardState::default();
        assert!(!state.overlay_visible(CardVariant::Grid));
        state.hovered = true;
        assert!(state.overlay_visible(CardVariant::Grid));
        assert!(!state.overlay_visible(CardVariant::Horizontal));
    }

    #[test]
    fn condition_line_prefix() {
        let mut entry = book("1", "exchange", None);
        assert_eq!(entry.condition_line(), None);
        entry.condition = Some("Good".to_string());
        assert_eq!(entry.condition_line().as_deref(), Some("Condition: Good"));
    }
}
