//! Reducer actions, effects, and transition logic for the landing page.

use page_host::PageConfig;
use thiserror::Error;

use crate::model::CategoryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Page-level view state shared by the navbar and carousel.
pub struct PageState {
    /// Page is scrolled past the navbar threshold.
    pub scrolled: bool,
    /// Mobile navigation drawer is open.
    pub mobile_menu_open: bool,
    /// Active featured-carousel filter.
    pub active_category: CategoryFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Paging direction of the featured carousel.
pub enum CarouselDirection {
    /// Toward the start of the list.
    Left,
    /// Toward the end of the list.
    Right,
}

impl CarouselDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Actions accepted by [`reduce_page`].
pub enum PageAction {
    /// The document scroll offset changed.
    ScrollOffsetChanged {
        /// Vertical offset in CSS pixels.
        offset_y: f64,
    },
    /// Toggle control of the mobile drawer.
    ToggleMobileMenu,
    /// Any exit path of the mobile drawer (close button, nav link, action button).
    CloseMobileMenu,
    /// Select a carousel filter tab.
    SelectCategory(CategoryFilter),
    /// Page the carousel by a fraction of its visible width.
    ScrollCarousel {
        /// Paging direction.
        direction: CarouselDirection,
        /// Visible width of the carousel container in CSS pixels.
        viewport_width: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Side effects requested by the reducer and executed by the runtime host.
pub enum RuntimeEffect {
    /// Suspend document scrolling for the mobile drawer.
    AcquireScrollLock,
    /// Release the mobile drawer's scroll lock.
    ReleaseScrollLock,
    /// Smoothly scroll the carousel container horizontally.
    ScrollCarouselBy {
        /// Signed horizontal delta in CSS pixels.
        delta_px: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
/// Reducer validation failures.
pub enum ReducerError {
    /// Carousel width was negative or not finite.
    #[error("invalid carousel viewport width {0}")]
    InvalidViewportWidth(f64),
    /// Scroll offset was not finite.
    #[error("invalid scroll offset {0}")]
    InvalidScrollOffset(f64),
}

/// Returns whether `offset_y` is past the navbar threshold (strictly greater).
pub fn is_past_scroll_threshold(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// Applies `action` to `state` and returns the side effects to run.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action carries a non-finite or negative measurement.
pub fn reduce_page(
    state: &mut PageState,
    config: &PageConfig,
    action: PageAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        PageAction::ScrollOffsetChanged { offset_y } => {
            if !offset_y.is_finite() {
                return Err(ReducerError::InvalidScrollOffset(offset_y));
            }
            state.scrolled = is_past_scroll_threshold(offset_y, config.scroll_threshold_px);
        }
        PageAction::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
            effects.push(if state.mobile_menu_open {
                RuntimeEffect::AcquireScrollLock
            } else {
                RuntimeEffect::ReleaseScrollLock
            });
        }
        PageAction::CloseMobileMenu => {
            if state.mobile_menu_open {
                state.mobile_menu_open = false;
                effects.push(RuntimeEffect::ReleaseScrollLock);
            }
        }
        PageAction::SelectCategory(category) => {
            state.active_category = category;
        }
        PageAction::ScrollCarousel {
            direction,
            viewport_width,
        } => {
            if !viewport_width.is_finite() || viewport_width < 0.0 {
                return Err(ReducerError::InvalidViewportWidth(viewport_width));
            }
            effects.push(RuntimeEffect::ScrollCarouselBy {
                delta_px: direction.sign() * viewport_width * config.carousel_page_fraction,
            });
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce(state: &mut PageState, action: PageAction) -> Vec<RuntimeEffect> {
        reduce_page(state, &PageConfig::default(), action).expect("reduce")
    }

    #[test]
    fn scrolled_flag_switches_only_past_threshold() {
        let mut state = PageState::default();
        for (offset, expected) in [(0.0, false), (10.0, false), (10.5, true), (250.0, true), (3.0, false)] {
            reduce(&mut state, PageAction::ScrollOffsetChanged { offset_y: offset });
            assert_eq!(state.scrolled, expected, "offset {offset}");
        }
    }

    #[test]
    fn scroll_threshold_follows_config() {
        let config = PageConfig {
            scroll_threshold_px: 64.0,
            ..PageConfig::default()
        };
        let mut state = PageState::default();
        reduce_page(&mut state, &config, PageAction::ScrollOffsetChanged { offset_y: 40.0 })
            .expect("reduce");
        assert!(!state.scrolled);
        assert!(is_past_scroll_threshold(65.0, config.scroll_threshold_px));
    }

    #[test]
    fn non_finite_scroll_offset_is_rejected() {
        let mut state = PageState::default();
        let err = reduce_page(
            &mut state,
            &PageConfig::default(),
            PageAction::ScrollOffsetChanged { offset_y: f64::NAN },
        )
        .expect_err("nan offset");
        assert!(matches!(err, ReducerError::InvalidScrollOffset(_)));
        assert_eq!(state, PageState::default());
    }

    #[test]
    fn toggle_acquires_then_releases_lock() {
        let mut state = PageState::default();
        assert_eq!(
            reduce(&mut state, PageAction::ToggleMobileMenu),
            vec![RuntimeEffect::AcquireScrollLock]
        );
        assert!(state.mobile_menu_open);
        assert_eq!(
            reduce(&mut state, PageAction::ToggleMobileMenu),
            vec![RuntimeEffect::ReleaseScrollLock]
        );
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn close_releases_only_when_open() {
        let mut state = PageState::default();
        assert!(reduce(&mut state, PageAction::CloseMobileMenu).is_empty());

        reduce(&mut state, PageAction::ToggleMobileMenu);
        assert_eq!(
            reduce(&mut state, PageAction::CloseMobileMenu),
            vec![RuntimeEffect::ReleaseScrollLock]
        );
        assert!(reduce(&mut state, PageAction::CloseMobileMenu).is_empty());
    }

    #[test]
    fn category_selection_does_not_scroll() {
        let mut state = PageState::default();
        let effects = reduce(&mut state, PageAction::SelectCategory(CategoryFilter::Donate));
        assert!(effects.is_empty());
        assert_eq!(state.active_category, CategoryFilter::Donate);
    }

    #[test]
    fn carousel_pages_by_half_width() {
        let mut state = PageState::default();
        assert_eq!(
            reduce(
                &mut state,
                PageAction::ScrollCarousel {
                    direction: CarouselDirection::Right,
                    viewport_width: 800.0,
                },
            ),
            vec![RuntimeEffect::ScrollCarouselBy { delta_px: 400.0 }]
        );
        assert_eq!(
            reduce(
                &mut state,
                PageAction::ScrollCarousel {
                    direction: CarouselDirection::Left,
                    viewport_width: 800.0,
                },
            ),
            vec![RuntimeEffect::ScrollCarouselBy { delta_px: -400.0 }]
        );
    }

    #[test]
    fn invalid_carousel_width_is_rejected() {
        let mut state = PageState::default();
        for width in [-1.0, f64::INFINITY, f64::NAN] {
            let err = reduce_page(
                &mut state,
                &PageConfig::default(),
                PageAction::ScrollCarousel {
                    direction: CarouselDirection::Left,
                    viewport_width: width,
                },
            )
            .expect_err("invalid width");
            assert!(matches!(err, ReducerError::InvalidViewportWidth(_)));
        }
    }
}
