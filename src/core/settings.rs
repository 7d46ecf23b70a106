use std::sync::Mutex;

use cosmic::{
    app::Settings,
    iced::{Limits, Size},
};

use crate::config::PatternDeckConfig;
use crate::flags::Flags;
use crate::icons::{ICON_CACHE, IconCache};

use super::localization::localize;

pub fn init() -> (Settings, Flags) {
    set_logger();
    localize();
    set_icon_cache();

    let settings = get_app_settings();
    let flags = get_flags();

    (settings, flags)
}

pub fn set_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,patterndeck=info")),
        )
        .init();
}

pub fn get_app_settings() -> Settings {
    let mut settings = Settings::default();

    settings = settings.size_limits(Limits::NONE.min_width(400.0).min_height(300.0));
    settings = settings.size(Size::new(900.0, 600.0));
    settings = settings.debug(false);
    settings
}

pub fn get_flags() -> Flags {
    let (config_handler, config) = (
        PatternDeckConfig::config_handler(),
        PatternDeckConfig::config(),
    );

    Flags {
        config_handler,
        config,
    }
}

pub fn set_icon_cache() {
    ICON_CACHE.get_or_init(|| Mutex::new(IconCache::new()));
}
