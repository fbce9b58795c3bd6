//! Collaborators the landing screen consumes but does not implement.
//!
//! The screen only talks to these through the traits below, so tests swap in
//! recording stubs and the browser build wires the real router, asset layout
//! and wall clock. Every collaborator is `Send + Sync` because Leptos views
//! and their event handlers must be `Send`.

use std::sync::Arc;

use chrono::NaiveDate;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::animation::{AnimationEngine, CssAnimationEngine};
use crate::config::LandingConfig;

/// Router collaborator: requests a transition to `path`.
///
/// Fire-and-forget. Whatever happens after the call (unknown path, guard,
/// duplicate navigation) is the implementation's business.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Resolved image reference, ready to render as an `<img>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub width: u32,
    pub height: u32,
    /// Request eager loading (above-the-fold images).
    pub priority: bool,
}

impl ImageSource {
    pub fn loading(&self) -> &'static str {
        if self.priority { "eager" } else { "lazy" }
    }
}

/// Image-asset pipeline: logical asset name plus intrinsic size to a source.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, name: &str, width: u32, height: u32, priority: bool) -> ImageSource;
}

/// Source of "today". Read at render time, never cached.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Everything the landing screen needs from the outside world.
#[derive(Clone)]
pub struct Services {
    pub navigator: Arc<dyn Navigator>,
    pub assets: Arc<dyn AssetResolver>,
    pub animation: Arc<dyn AnimationEngine>,
    pub clock: Arc<dyn Clock>,
}

impl Services {
    /// Production wiring. Must run inside `<Router>` because it grabs the
    /// router's navigate handle.
    pub fn browser(config: &LandingConfig) -> Self {
        Self {
            navigator: Arc::new(HistoryNavigator::from_router()),
            assets: Arc::new(StaticAssetResolver::from_config(config)),
            animation: Arc::new(CssAnimationEngine),
            clock: Arc::new(SystemClock),
        }
    }
}

/// [`Navigator`] backed by `leptos_router`'s history integration.
pub struct HistoryNavigator {
    navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
}

impl HistoryNavigator {
    pub fn from_router() -> Self {
        Self {
            navigate: Arc::new(use_navigate()),
        }
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Maps `name` to `{asset_base}{name}.{extension}`, e.g. `/hero-image.svg`.
#[derive(Debug, Clone)]
pub struct StaticAssetResolver {
    base: String,
    extension: String,
}

impl StaticAssetResolver {
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &LandingConfig) -> Self {
        Self::new(config.asset_base.clone(), config.asset_extension.clone())
    }
}

impl AssetResolver for StaticAssetResolver {
    fn resolve(&self, name: &str, width: u32, height: u32, priority: bool) -> ImageSource {
        ImageSource {
            src: format!("{}{}.{}", self.base, name, self.extension),
            width,
            height,
            priority,
        }
    }
}

/// Local calendar date from the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_resolver_builds_path_from_config() {
        let resolver = StaticAssetResolver::from_config(&LandingConfig::default());
        assert_eq!(
            resolver.resolve("hero-image", 600, 400, true),
            ImageSource {
                src: "/hero-image.svg".into(),
                width: 600,
                height: 400,
                priority: true,
            }
        );
    }

    #[test]
    fn static_resolver_honours_cdn_base() {
        let resolver = StaticAssetResolver::new("https://cdn.edupath.app/img/", "webp");
        let image = resolver.resolve("hero-image", 600, 400, false);
        assert_eq!(image.src, "https://cdn.edupath.app/img/hero-image.webp");
    }

    #[test]
    fn priority_maps_to_loading_hint() {
        let eager = ImageSource {
            src: String::new(),
            width: 1,
            height: 1,
            priority: true,
        };
        let lazy = ImageSource {
            priority: false,
            ..eager.clone()
        };
        assert_eq!(eager.loading(), "eager");
        assert_eq!(lazy.loading(), "lazy");
    }

    #[test]
    fn system_clock_reads_local_date() {
        let before = chrono::Local::now().date_naive();
        let today = SystemClock.today();
        let after = chrono::Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
