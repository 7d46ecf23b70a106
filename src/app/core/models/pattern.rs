// SPDX-License-Identifier: GPL-3.0

use cosmic::iced::Color;

use crate::fl;

/// A single entry of the design pattern catalog.
///
/// `name`, `description` and `url` are message ids into the localization
/// bundle, resolved at render time. Records are built once at startup and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: PatternCategory,
}

impl DesignPattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        url: &'static str,
        category: PatternCategory,
    ) -> Self {
        Self {
            name,
            description,
            url,
            category,
        }
    }

    /// Every message id the record points at
    pub fn message_ids(&self) -> [&'static str; 3] {
        [self.name, self.description, self.url]
    }
}

/// The category a [`DesignPattern`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            PatternCategory::Creational => write!(f, "{}", fl!("creational")),
            PatternCategory::Structural => write!(f, "{}", fl!("structural")),
            PatternCategory::Behavioral => write!(f, "{}", fl!("behavioral")),
        }
    }
}

impl PatternCategory {
    /// Appropiate card background color for the [`PatternCategory`]
    pub fn get_color(&self) -> Color {
        match &self {
            PatternCategory::Creational => Color {
                r: 66.0 / 255.0,
                g: 133.0 / 255.0,
                b: 244.0 / 255.0,
                a: 0.75,
            },
            PatternCategory::Structural => Color {
                r: 245.0 / 255.0,
                g: 188.0 / 255.0,
                b: 66.0 / 255.0,
                a: 0.75,
            },
            PatternCategory::Behavioral => Color {
                r: 21.0 / 255.0,
                g: 191.0 / 255.0,
                b: 89.0 / 255.0,
                a: 0.75,
            },
        }
    }

    /// Appropiate accent/border color for the [`PatternCategory`]
    pub fn get_border_color(&self) -> Color {
        match &self {
            PatternCategory::Creational => Color {
                r: 30.0 / 255.0,
                g: 90.0 / 255.0,
                b: 180.0 / 255.0,
                a: 1.0,
            },
            PatternCategory::Structural => Color {
                r: 250.0 / 255.0,
                g: 146.0 / 255.0,
                b: 12.0 / 255.0,
                a: 1.0,
            },
            PatternCategory::Behavioral => Color {
                r: 10.0 / 255.0,
                g: 209.0 / 255.0,
                b: 90.0 / 255.0,
                a: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [PatternCategory; 3] = [
        PatternCategory::Creational,
        PatternCategory::Structural,
        PatternCategory::Behavioral,
    ];

    #[test]
    fn every_category_maps_to_one_color_pair() {
        for category in CATEGORIES {
            let fill = category.get_color();
            let border = category.get_border_color();
            assert!(fill.a > 0.0, "{category:?} has no fill color");
            assert!(border.a > 0.0, "{category:?} has no border color");
        }
    }

    #[test]
    fn color_pairs_are_pairwise_distinct() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.get_color(), b.get_color());
                assert_ne!(a.get_border_color(), b.get_border_color());
            }
        }
    }

    #[test]
    fn message_ids_expose_all_three_references() {
        let pattern = DesignPattern::new(
            "singleton-name",
            "singleton-description",
            "singleton-url",
            PatternCategory::Creational,
        );
        assert_eq!(
            pattern.message_ids(),
            ["singleton-name", "singleton-description", "singleton-url"]
        );
    }
}
