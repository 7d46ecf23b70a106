// SPDX-License-Identifier: GPL-3.0

use std::{collections::HashSet, sync::Arc};

use crate::app::core::models::pattern::{DesignPattern, PatternCategory};
use crate::core::localization;

/// Read-only, ordered catalog of [`DesignPattern`] records.
///
/// Built once at startup, validated, then shared behind an [`Arc`]. Display
/// order is construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<DesignPattern>,
}

impl PatternCatalog {
    /// The built-in Gang of Four catalog, in book order
    pub fn builtin() -> Self {
        use PatternCategory::{Behavioral, Creational, Structural};

        Self::from_patterns(vec![
            DesignPattern::new(
                "abstract-factory-name",
                "abstract-factory-description",
                "abstract-factory-url",
                Creational,
            ),
            DesignPattern::new(
                "builder-name",
                "builder-description",
                "builder-url",
                Creational,
            ),
            DesignPattern::new(
                "factory-method-name",
                "factory-method-description",
                "factory-method-url",
                Creational,
            ),
            DesignPattern::new(
                "prototype-name",
                "prototype-description",
                "prototype-url",
                Creational,
            ),
            DesignPattern::new(
                "singleton-name",
                "singleton-description",
                "singleton-url",
                Creational,
            ),
            DesignPattern::new(
                "adapter-name",
                "adapter-description",
                "adapter-url",
                Structural,
            ),
            DesignPattern::new("bridge-name", "bridge-description", "bridge-url", Structural),
            DesignPattern::new(
                "composite-name",
                "composite-description",
                "composite-url",
                Structural,
            ),
            DesignPattern::new(
                "decorator-name",
                "decorator-description",
                "decorator-url",
                Structural,
            ),
            DesignPattern::new("facade-name", "facade-description", "facade-url", Structural),
            DesignPattern::new(
                "flyweight-name",
                "flyweight-description",
                "flyweight-url",
                Structural,
            ),
            DesignPattern::new("proxy-name", "proxy-description", "proxy-url", Structural),
            DesignPattern::new(
                "chain-of-responsibility-name",
                "chain-of-responsibility-description",
                "chain-of-responsibility-url",
                Behavioral,
            ),
            DesignPattern::new(
                "command-name",
                "command-description",
                "command-url",
                Behavioral,
            ),
            DesignPattern::new(
                "interpreter-name",
                "interpreter-description",
                "interpreter-url",
                Behavioral,
            ),
            DesignPattern::new(
                "iterator-name",
                "iterator-description",
                "iterator-url",
                Behavioral,
            ),
            DesignPattern::new(
                "mediator-name",
                "mediator-description",
                "mediator-url",
                Behavioral,
            ),
            DesignPattern::new(
                "memento-name",
                "memento-description",
                "memento-url",
                Behavioral,
            ),
            DesignPattern::new(
                "observer-name",
                "observer-description",
                "observer-url",
                Behavioral,
            ),
            DesignPattern::new("state-name", "state-description", "state-url", Behavioral),
            DesignPattern::new(
                "strategy-name",
                "strategy-description",
                "strategy-url",
                Behavioral,
            ),
            DesignPattern::new(
                "template-method-name",
                "template-method-description",
                "template-method-url",
                Behavioral,
            ),
            DesignPattern::new(
                "visitor-name",
                "visitor-description",
                "visitor-url",
                Behavioral,
            ),
        ])
    }

    pub fn from_patterns(patterns: Vec<DesignPattern>) -> Self {
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DesignPattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesignPattern> {
        self.patterns.iter()
    }

    /// Check the catalog against the loaded localization bundle.
    ///
    /// Every message id has to resolve and has to be unique across the whole
    /// catalog; an empty catalog is valid. Runs once at startup, never at
    /// render time.
    pub fn validate(&self) -> Result<(), anywho::Error> {
        let mut seen_ids = HashSet::new();

        for pattern in &self.patterns {
            for message_id in pattern.message_ids() {
                if !localization::exists(message_id) {
                    return Err(anywho::anywho!(
                        "no localization for message id '{}'",
                        message_id
                    ));
                }

                if !seen_ids.insert(message_id) {
                    return Err(anywho::anywho!(
                        "duplicate catalog message id '{}'",
                        message_id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Build and validate the application catalog
pub async fn load_catalog() -> Arc<PatternCatalog> {
    let catalog = PatternCatalog::builtin();

    match catalog.validate() {
        Ok(_) => tracing::info!(patterns = catalog.len(), "Pattern catalog loaded"),
        Err(err) => {
            tracing::error!("Error occurred validating the pattern catalog: {err}");
            std::process::exit(1);
        }
    };

    Arc::new(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        assert!(PatternCatalog::builtin().validate().is_ok());
    }

    #[test]
    fn builtin_catalog_has_the_gang_of_four_split() {
        let catalog = PatternCatalog::builtin();
        let count = |category: PatternCategory| {
            catalog
                .iter()
                .filter(|pattern| pattern.category == category)
                .count()
        };

        assert_eq!(catalog.len(), 23);
        assert_eq!(count(PatternCategory::Creational), 5);
        assert_eq!(count(PatternCategory::Structural), 7);
        assert_eq!(count(PatternCategory::Behavioral), 11);
    }

    #[test]
    fn catalog_preserves_construction_order() {
        let patterns = vec![
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
        ];
        let catalog = PatternCatalog::from_patterns(patterns.clone());

        assert_eq!(catalog.len(), 3);
        let collected: Vec<DesignPattern> = catalog.iter().copied().collect();
        assert_eq!(collected, patterns);
        assert_eq!(catalog.get(1), Some(&patterns[1]));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = PatternCatalog::from_patterns(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn validation_rejects_unknown_message_ids() {
        let catalog = PatternCatalog::from_patterns(vec![DesignPattern::new(
            "missing-name",
            "missing-description",
            "missing-url",
            PatternCategory::Creational,
        )]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validation_rejects_duplicate_entries() {
        let singleton = DesignPattern::new(
            "singleton-name",
            "singleton-description",
            "singleton-url",
            PatternCategory::Creational,
        );
        let catalog = PatternCatalog::from_patterns(vec![singleton, singleton]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validation_rejects_message_ids_shared_between_entries() {
        // both descriptions point at the singleton text
        let catalog = PatternCatalog::from_patterns(vec![
            DesignPattern::new(
                "singleton-name",
                "singleton-description",
                "singleton-url",
                PatternCategory::Creational,
            ),
            DesignPattern::new(
                "adapter-name",
                "singleton-description",
                "adapter-url",
                PatternCategory::Structural,
            ),
        ]);
        assert!(catalog.validate().is_err());
    }
}
