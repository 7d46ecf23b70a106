use cosmic::cosmic_config;

use crate::config::PatternDeckConfig;

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: PatternDeckConfig,
}
