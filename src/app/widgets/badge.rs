// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    iced::{
        Background, Border, Color, Element, Length, Padding, Point, Rectangle, Size, Vector,
        alignment::{Horizontal, Vertical},
        event::{self, Event},
        mouse, overlay,
    },
    iced_core::{
        Clipboard, Layout, Renderer as IcedRenderer, Shell, layout, renderer, text::Renderer,
        widget::Tree,
    },
    widget::{Operation, Widget},
};

use crate::app::core::models::pattern::PatternCategory;

/// A small rounded badge naming a [`PatternCategory`], filled with the
/// category accent color
#[must_use]
pub struct CategoryBadge<'a, Message> {
    /// Category the badge labels
    category: PatternCategory,
    /// Localized label text
    label: String,
    /// Padding inside the badge
    padding: Padding,
    /// Font size
    font_size: f32,
    _phantom: std::marker::PhantomData<&'a Message>,
}

impl<'a, Message> CategoryBadge<'a, Message> {
    pub fn new(category: PatternCategory) -> Self {
        Self {
            category,
            label: category.to_string(),
            padding: Padding::from([6.0, 12.0]),
            font_size: 14.0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set custom padding
    pub fn padding<P: Into<Padding>>(mut self, padding: P) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

/// Convenience function to create a category badge
pub fn category_badge<'a, Message>(category: PatternCategory) -> CategoryBadge<'a, Message> {
    CategoryBadge::new(category)
}

impl<'a, Message: 'static + Clone> Widget<Message, cosmic::Theme, cosmic::Renderer>
    for CategoryBadge<'a, Message>
{
    fn children(&self) -> Vec<Tree> {
        Vec::new()
    }

    fn diff(&mut self, _tree: &mut Tree) {
        // No children to diff
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &cosmic::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        // estimate size based on text length and font size
        let estimated_char_width = self.font_size * 0.6;
        let estimated_text_width = self.label.chars().count() as f32 * estimated_char_width;
        let estimated_text_height = self.font_size * 1.5;

        let width = estimated_text_width + self.padding.horizontal();
        let height = estimated_text_height + self.padding.vertical();

        let size = limits.resolve(
            Length::Shrink,
            Length::Shrink,
            Size::new(width, height),
        );

        layout::Node::new(size)
    }

    fn operate(
        &self,
        _tree: &mut Tree,
        layout: Layout<'_>,
        _renderer: &cosmic::Renderer,
        operation: &mut dyn Operation<()>,
    ) {
        operation.container(None, layout.bounds(), &mut |_operation| {});
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        _event: Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &cosmic::Renderer,
        _clipboard: &mut dyn Clipboard,
        _shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &cosmic::Renderer,
    ) -> mouse::Interaction {
        mouse::Interaction::default()
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut cosmic::Renderer,
        _theme: &cosmic::Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // badge background in the category accent
        renderer.fill_quad(
            cosmic::iced::advanced::renderer::Quad {
                bounds,
                border: Border::default().rounded(bounds.height / 2.0),
                shadow: cosmic::iced::Shadow::default(),
            },
            Background::Color(self.category.get_border_color()),
        );

        let text_center = Point::new(
            bounds.x + bounds.width / 2.0,
            bounds.y + bounds.height / 2.0,
        );
        renderer.fill_text(
            cosmic::iced_core::text::Text {
                content: self.label.clone(),
                bounds: Size::new(bounds.width, bounds.height),
                size: cosmic::iced::Pixels(self.font_size),
                line_height: cosmic::iced_core::text::LineHeight::default(),
                font: cosmic::font::Font::default(),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                shaping: cosmic::iced::advanced::text::Shaping::Basic,
                wrapping: cosmic::iced_core::text::Wrapping::None,
            },
            text_center,
            Color::WHITE,
            bounds,
        );
    }

    fn overlay<'b>(
        &'b mut self,
        _tree: &'b mut Tree,
        _layout: Layout<'_>,
        _renderer: &cosmic::Renderer,
        _translation: Vector,
    ) -> Option<overlay::Element<'b, Message, cosmic::Theme, cosmic::Renderer>> {
        None
    }
}

impl<'a, Message: 'static + Clone> From<CategoryBadge<'a, Message>>
    for Element<'a, Message, cosmic::Theme, cosmic::Renderer>
{
    fn from(badge: CategoryBadge<'a, Message>) -> Self {
        Self::new(badge)
    }
}
