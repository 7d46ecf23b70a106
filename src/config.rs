// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    Application,
    cosmic_config::{self, Config, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

use crate::app::AppModel;

const CONFIG_VERSION: u64 = 1;

#[derive(Debug, Default, Clone, CosmicConfigEntry, Eq, PartialEq)]
pub struct PatternDeckConfig {
    pub app_theme: AppTheme,
}

impl PatternDeckConfig {
    pub fn config_handler() -> Option<Config> {
        Config::new(AppModel::APP_ID, CONFIG_VERSION).ok()
    }

    pub fn config() -> PatternDeckConfig {
        match Self::config_handler() {
            Some(config_handler) => {
                PatternDeckConfig::get_entry(&config_handler).unwrap_or_else(|(error, config)| {
                    tracing::error!("Error whilst loading config: {error:#?}");
                    config
                })
            }
            None => PatternDeckConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }
}
