// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use cosmic::cosmic_theme::Spacing;
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::mouse::ScrollDelta;
use cosmic::iced::{Alignment, Font, Length, Subscription};
use cosmic::iced_widget::{column, row, stack};
use cosmic::widget::{Space, button, container, text};
use cosmic::{Element, theme};

use crate::app::core::catalog::PatternCatalog;
use crate::app::core::models::pattern::DesignPattern;
use crate::app::widgets::badge::category_badge;
use crate::core::localization;
use crate::{fl, icons};

/// Characters of description a card body holds before it gets cut off
const DESCRIPTION_BUDGET: usize = 480;

/// Pixels a full wheel notch counts for
const SCROLL_LINE_PIXELS: f32 = 120.0;

/// Accumulated pixels needed to turn the page
const PAGE_TURN_THRESHOLD: f32 = 100.0;

pub struct PatternsScreen {
    catalog: Arc<PatternCatalog>,
    current_index: usize,
    wheel: WheelTracker,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Page one card back
    PreviousCard,
    /// Page one card forward
    NextCard,
    /// Jump to the first card of the deck
    FirstCard,
    /// Jump to the last card of the deck
    LastCard,
    /// Wheel/touchpad scrolling over the deck
    Wheel(ScrollDelta),
    /// Opens the given url on the browser
    LaunchUrl(String),
}

pub enum Action {
    None,
    /// The visible card changed
    PageChanged,
}

impl PatternsScreen {
    /// Init the screen on the first card of the given catalog
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self {
            catalog,
            current_index: 0,
            wheel: WheelTracker::default(),
        }
    }

    /// The pattern on the currently visible card
    pub fn current_pattern(&self) -> Option<&DesignPattern> {
        self.catalog.get(self.current_index)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        match self.current_pattern() {
            None => empty_view(),
            Some(pattern) => deck_view(pattern, self.current_index, self.catalog.len(), spacing),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::PreviousCard => self.set_page(self.current_index.saturating_sub(1)),
            Message::NextCard => self.set_page(self.current_index + 1),
            Message::FirstCard => self.set_page(0),
            Message::LastCard => self.set_page(self.catalog.len().saturating_sub(1)),
            Message::Wheel(delta) => match self.wheel.push(delta) {
                Some(PageStep::Forward) => self.update(Message::NextCard),
                Some(PageStep::Backward) => self.update(Message::PreviousCard),
                None => Action::None,
            },
            Message::LaunchUrl(url) => {
                match open::that_detached(&url) {
                    Ok(()) => {}
                    Err(err) => {
                        tracing::error!("failed to open {url:?}: {err}");
                    }
                }
                Action::None
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    fn set_page(&mut self, index: usize) -> Action {
        let clamped = clamp_page(index, self.catalog.len());
        if clamped == self.current_index {
            return Action::None;
        }

        self.current_index = clamped;
        self.wheel.reset();
        Action::PageChanged
    }
}

//
// VIEWS
//

fn deck_view<'a>(
    pattern: &'a DesignPattern,
    current_index: usize,
    total: usize,
    spacing: Spacing,
) -> Element<'a, Message> {
    let position_text = fl!("card-position", current = current_index + 1, total = total);

    container(stack![
        pattern_card(pattern, spacing),
        container(text(position_text).font(Font {
            weight: cosmic::iced::font::Weight::Bold,
            ..Default::default()
        }))
        .padding(10)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .width(Length::Fill)
        .height(Length::Fill),
        paging_controls(current_index, total, spacing),
    ])
    .padding(15)
    .center(Length::Fill)
    .into()
}

fn pattern_card<'a>(pattern: &'a DesignPattern, spacing: Spacing) -> Element<'a, Message> {
    let title = localization::text(pattern.name);
    let description = ellipsize(localization::text(pattern.description), DESCRIPTION_BUDGET);
    let url = localization::text(pattern.url);

    let badge = container(category_badge(pattern.category).font_size(12.0))
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let title = text::title1(title).width(Length::Fill).align_x(Horizontal::Center);

    let description = container(text::body(description))
        .padding([spacing.space_none, spacing.space_xs])
        .width(Length::Fill)
        .height(Length::Fill);

    let reference = container(
        button::link(url.clone())
            .on_press(Message::LaunchUrl(url))
            .padding(0),
    )
    .align_x(Horizontal::Center)
    .width(Length::Fill);

    let category = pattern.category;

    container(column![badge, title, description, reference].spacing(spacing.space_s))
        .padding(spacing.space_m)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme| {
            let mut a = theme::style::Container::primary(theme.cosmic());
            a.background = Some(cosmic::iced::Background::Color(category.get_color()));
            a.border = cosmic::iced::Border {
                color: category.get_border_color(),
                width: 0.0,
                radius: theme.cosmic().corner_radii.radius_s.into(),
            };
            a.shadow = cosmic::iced_core::Shadow {
                color: category.get_border_color(),
                offset: cosmic::iced::Vector::new(0.0, 0.0),
                blur_radius: 16.0,
            };
            a
        })
        .into()
}

fn paging_controls<'a>(
    current_index: usize,
    total: usize,
    spacing: Spacing,
) -> Element<'a, Message> {
    container(
        row![
            button::icon(icons::get_handle("go-previous-symbolic", 18))
                .class(theme::Button::Standard)
                .on_press_maybe((current_index > 0).then_some(Message::PreviousCard)),
            Space::new(Length::Fill, Length::Shrink),
            button::icon(icons::get_handle("go-next-symbolic", 18))
                .class(theme::Button::Standard)
                .on_press_maybe((current_index + 1 < total).then_some(Message::NextCard)),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill),
    )
    .align_y(Vertical::Center)
    .padding([spacing.space_none, spacing.space_xs])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn empty_view<'a>() -> Element<'a, Message> {
    container(text(fl!("empty-deck"))).center(Length::Fill).into()
}

//
// HELPERS
//

/// Keep a page index inside the deck bounds
fn clamp_page(index: usize, total: usize) -> usize {
    if total == 0 { 0 } else { index.min(total - 1) }
}

/// Cut `text` down to `budget` characters, appending an ellipsis when it does
/// not fit. Always cuts on a char boundary.
fn ellipsize(text: String, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text;
    }

    let truncated: String = text.chars().take(budget).collect();
    format!("{}…", truncated.trim_end())
}

/// Direction a completed wheel gesture pages towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageStep {
    Forward,
    Backward,
}

/// Accumulates wheel/touchpad deltas until they amount to a page turn.
///
/// Deltas below the threshold never move the deck, so it always rests on a
/// card boundary instead of free-scrolling.
#[derive(Debug, Default)]
struct WheelTracker {
    accumulated: f32,
}

impl WheelTracker {
    fn push(&mut self, delta: ScrollDelta) -> Option<PageStep> {
        let (x, y) = match delta {
            ScrollDelta::Lines { x, y } => (x * SCROLL_LINE_PIXELS, y * SCROLL_LINE_PIXELS),
            ScrollDelta::Pixels { x, y } => (x, y),
        };

        // the dominant axis wins, horizontal touchpad swipes work next to
        // plain vertical wheels
        let step = if x.abs() > y.abs() { x } else { y };
        self.accumulated += step;

        if self.accumulated <= -PAGE_TURN_THRESHOLD {
            self.accumulated = 0.0;
            Some(PageStep::Forward)
        } else if self.accumulated >= PAGE_TURN_THRESHOLD {
            self.accumulated = 0.0;
            Some(PageStep::Backward)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::models::pattern::{DesignPattern, PatternCategory};

    fn three_card_screen() -> PatternsScreen {
        PatternsScreen::new(Arc::new(PatternCatalog::from_patterns(vec![
            DesignPattern::new(
                "singleton-name",
                "singleton-description",
                "singleton-url",
                PatternCategory::Creational,
            ),
            DesignPattern::new(
                "adapter-name",
                "adapter-description",
                "adapter-url",
                PatternCategory::Structural,
            ),
            DesignPattern::new(
                "observer-name",
                "observer-description",
                "observer-url",
                PatternCategory::Behavioral,
            ),
        ])))
    }

    #[test]
    fn paging_walks_the_deck_in_catalog_order() {
        let mut screen = three_card_screen();
        assert_eq!(screen.current_pattern().unwrap().name, "singleton-name");

        screen.update(Message::NextCard);
        assert_eq!(screen.current_pattern().unwrap().name, "adapter-name");

        screen.update(Message::NextCard);
        assert_eq!(screen.current_pattern().unwrap().name, "observer-name");
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut screen = three_card_screen();

        screen.update(Message::PreviousCard);
        assert_eq!(screen.current_index, 0);

        screen.update(Message::LastCard);
        screen.update(Message::NextCard);
        assert_eq!(screen.current_index, 2);
    }

    #[test]
    fn first_and_last_jump_to_the_deck_edges() {
        let mut screen = three_card_screen();

        screen.update(Message::LastCard);
        assert_eq!(screen.current_index, 2);

        screen.update(Message::FirstCard);
        assert_eq!(screen.current_index, 0);
    }

    #[test]
    fn page_changes_are_reported_and_no_ops_are_not() {
        let mut screen = three_card_screen();

        assert!(matches!(
            screen.update(Message::NextCard),
            Action::PageChanged
        ));
        assert!(matches!(
            screen.update(Message::FirstCard),
            Action::PageChanged
        ));
        assert!(matches!(
            screen.update(Message::PreviousCard),
            Action::None
        ));
    }

    #[test]
    fn empty_deck_has_no_current_pattern() {
        let mut screen = PatternsScreen::new(Arc::new(PatternCatalog::from_patterns(Vec::new())));

        assert!(screen.current_pattern().is_none());
        assert!(matches!(screen.update(Message::NextCard), Action::None));
        assert!(matches!(screen.update(Message::LastCard), Action::None));
    }

    #[test]
    fn one_wheel_notch_turns_a_single_page() {
        let mut screen = three_card_screen();

        screen.update(Message::Wheel(ScrollDelta::Lines { x: 0.0, y: -1.0 }));
        assert_eq!(screen.current_index, 1);

        screen.update(Message::Wheel(ScrollDelta::Lines { x: 0.0, y: 1.0 }));
        assert_eq!(screen.current_index, 0);
    }

    #[test]
    fn small_scroll_deltas_accumulate_before_turning() {
        let mut screen = three_card_screen();

        for _ in 0..3 {
            screen.update(Message::Wheel(ScrollDelta::Pixels { x: 0.0, y: -30.0 }));
            assert_eq!(screen.current_index, 0);
        }

        screen.update(Message::Wheel(ScrollDelta::Pixels { x: 0.0, y: -30.0 }));
        assert_eq!(screen.current_index, 1);
    }

    #[test]
    fn horizontal_swipes_dominate_vertical_jitter() {
        let mut screen = three_card_screen();

        screen.update(Message::Wheel(ScrollDelta::Pixels { x: -120.0, y: 10.0 }));
        assert_eq!(screen.current_index, 1);
    }

    #[test]
    fn wheel_accumulation_resets_on_page_change() {
        let mut screen = three_card_screen();

        screen.update(Message::Wheel(ScrollDelta::Pixels { x: 0.0, y: -90.0 }));
        screen.update(Message::NextCard);

        // the pending 90px must not carry over into the new page
        screen.update(Message::Wheel(ScrollDelta::Pixels { x: 0.0, y: -90.0 }));
        assert_eq!(screen.current_index, 1);
    }

    #[test]
    fn ellipsize_keeps_fitting_text_untouched() {
        assert_eq!(ellipsize(String::from("Singleton"), 20), "Singleton");
        assert_eq!(ellipsize(String::from("abc"), 3), "abc");
    }

    #[test]
    fn ellipsize_cuts_on_char_boundaries() {
        assert_eq!(ellipsize(String::from("abcdef"), 4), "abcd…");
        assert_eq!(ellipsize(String::from("áéíóú"), 2), "áé…");
    }

    #[test]
    fn ellipsize_trims_trailing_whitespace_before_the_ellipsis() {
        assert_eq!(ellipsize(String::from("one two three"), 4), "one…");
    }

    #[test]
    fn clamp_page_handles_empty_and_oversized_indexes() {
        assert_eq!(clamp_page(0, 0), 0);
        assert_eq!(clamp_page(5, 0), 0);
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
    }
}
