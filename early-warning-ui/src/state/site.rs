//! Site State
//!
//! Config compiled in from `site.toml`, plus the resources every mount of
//! the decorative scene shares: the single-instance guard and the frame
//! scheduler.

use std::rc::Rc;

use leptos::*;

use early_warning::config::{Config, ConfigError};
use early_warning::scene::{FrameScheduler, SceneGuard};

use crate::browser::BrowserScheduler;

const SITE_TOML: &str = include_str!("../../site.toml");

/// Shared site context
#[derive(Clone)]
pub struct SiteState {
    pub config: Rc<Config>,
    /// At most one decorative scene per page
    pub scene_guard: SceneGuard,
    pub scheduler: Rc<dyn FrameScheduler>,
}

impl SiteState {
    pub fn animations_enabled(&self) -> bool {
        self.config.animations.enabled
    }
}

/// Parse the embedded config. A broken file falls back to defaults and
/// hands the error back so it can be logged once logging is up.
pub fn load_site_config() -> (Config, Option<ConfigError>) {
    parse_site_config(SITE_TOML)
}

fn parse_site_config(content: &str) -> (Config, Option<ConfigError>) {
    match Config::from_toml_str(content) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

/// Route `log` (and `tracing`, through its `log` feature) to the console
pub fn init_logging(level: &str) {
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Provide the site context to the component tree
pub fn provide_site_state(config: Config) {
    let state = SiteState {
        config: Rc::new(config),
        scene_guard: SceneGuard::new(),
        scheduler: Rc::new(BrowserScheduler::new()),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use early_warning::{CarouselSpeed, Theme};

    #[test]
    fn test_embedded_config_parses() {
        let (config, err) = load_site_config();
        assert!(err.is_none());
        assert_eq!(config.scene.book_count, 6);
        assert_eq!(config.charts.carousel_speed, CarouselSpeed::Slow);
        assert_eq!(config.theme.initial, Theme::Light);
    }

    #[test]
    fn test_broken_config_falls_back() {
        let (config, err) = parse_site_config("[scene\nbook_count = ");
        assert!(err.is_some());
        assert_eq!(config.scene.data_point_count, 40);
        assert!(config.animations.enabled);
    }
}
