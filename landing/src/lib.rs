//! # edupath-landing
//!
//! The EduPath landing screen in [Leptos](https://leptos.dev/): a hero pitch
//! with "Log In" / "Sign Up" actions, a three-card value proposition and a
//! copyright footer.
//!
//! The screen is pure composition. It reaches the outside world only through
//! the collaborator traits in [`services`] (router, image assets, clock) and
//! the [`animation::AnimationEngine`], all bundled in [`services::Services`].
//!
//! ## Architecture
//!
//! - [`content`] - static copy, navigation actions and value cards
//! - [`navigation`] - click to router dispatch
//! - [`animation`] - declarative entrance animations and engines
//! - [`sections`] - hero, value proposition, footer
//! - [`pages`] - the landing page and routed placeholders
//! - [`app`] - router wiring for the browser build
//!
//! ## Static rendering
//!
//! [`render_landing`] renders the screen to an HTML string with Leptos'
//! `RenderHtml`, no browser needed:
//!
//! ```rust,ignore
//! use edupath_landing::{render_landing, config::LandingConfig};
//!
//! let html = render_landing(&my_services, &LandingConfig::default());
//! assert!(html.contains("Why EduPath?"));
//! ```

pub mod animation;
pub mod app;
pub mod config;
pub mod content;
pub mod navigation;
pub mod pages;
pub mod sections;
pub mod services;
pub mod styles;

pub use app::App;

use config::LandingConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::LandingPage;
use services::Services;

/// Crate version, shown in the start-up log line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the landing screen to static HTML.
///
/// Requires Leptos' `ssr` renderer: build with `--features ssr` (tests enable
/// it through dev-dependencies). The trunk CSR bundle never calls this.
pub fn render_landing(services: &Services, config: &LandingConfig) -> String {
    let page = view! {
        <LandingPage services=services.clone() config=config.clone() />
    };
    page.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{CssAnimationEngine, NoopAnimationEngine};
    use crate::services::{Clock, Navigator, StaticAssetResolver};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct IgnoreNavigation;

    impl Navigator for IgnoreNavigation {
        fn navigate(&self, _path: &str) {}
    }

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn services(date: NaiveDate) -> Services {
        Services {
            navigator: Arc::new(IgnoreNavigation),
            assets: Arc::new(StaticAssetResolver::new("/", "svg")),
            animation: Arc::new(NoopAnimationEngine),
            clock: Arc::new(FixedClock(date)),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn render(services: &Services) -> String {
        render_landing(services, &LandingConfig::default())
    }

    #[test]
    fn regions_render_in_order() {
        let html = render(&services(day(2025, 6, 1)));
        let hero = html.find("class=\"hero\"").expect("hero");
        let value = html.find("class=\"value-proposition\"").expect("value proposition");
        let footer = html.find("<footer").expect("footer");
        assert!(hero < value && value < footer);
    }

    #[test]
    fn hero_has_exactly_two_buttons_login_first() {
        let html = render(&services(day(2025, 6, 1)));
        assert_eq!(html.matches("<button").count(), 2);
        let login = html.find(">Log In</button>").expect("Log In button");
        let signup = html.find(">Sign Up</button>").expect("Sign Up button");
        assert!(login < signup);
    }

    #[test]
    fn heading_emphasises_future() {
        let html = render(&services(day(2025, 6, 1)));
        assert!(html.contains("<span class=\"hero-title-accent\">Future</span>"));
        assert!(html.contains("Discover Your "));
        assert!(html.contains(" with EduPath"));
    }

    #[test]
    fn footer_shows_render_year() {
        let html = render(&services(day(2025, 6, 1)));
        assert!(html.contains("© 2025 EduPath. All rights reserved."));

        let html = render(&services(day(2030, 1, 1)));
        assert!(html.contains("© 2030 EduPath. All rights reserved."));
    }

    #[test]
    fn footer_uses_configured_product_name() {
        let config = LandingConfig {
            product_name: "EduPath Beta".into(),
            ..Default::default()
        };
        let html = render_landing(&services(day(2026, 3, 9)), &config);
        assert!(html.contains("© 2026 EduPath Beta. All rights reserved."));
    }

    #[test]
    fn noop_engine_renders_settled_regions() {
        let html = render(&services(day(2025, 6, 1)));
        assert!(!html.contains("animation:"));
        assert!(!html.contains("@keyframes"));
        assert!(!html.contains("opacity: 0"));
    }

    #[test]
    fn css_engine_adds_keyframes_and_inline_animations() {
        let mut services = services(day(2025, 6, 1));
        services.animation = Arc::new(CssAnimationEngine);
        let html = render(&services);

        assert_eq!(html.matches("@keyframes edupath-enter-").count(), 3);
        assert!(html.contains("animation: edupath-enter-hero-text 800ms ease-out 0ms both"));
        assert!(html.contains("animation: edupath-enter-hero-image 600ms ease-out 0ms both"));
        assert!(html.contains(
            "animation: edupath-enter-value-proposition 800ms ease-out 300ms both"
        ));
        assert!(!html.contains(";;"));
    }

    #[test]
    fn hero_image_is_eager_at_intrinsic_size() {
        let html = render(&services(day(2025, 6, 1)));
        assert!(html.contains("src=\"/hero-image.svg\""));
        assert!(html.contains("width=\"600\""));
        assert!(html.contains("height=\"400\""));
        assert!(html.contains("loading=\"eager\""));
        assert!(html.contains("alt=\"EduPath Hero Illustration\""));
    }

    #[test]
    fn three_cards_in_display_order() {
        let html = render(&services(day(2025, 6, 1)));
        assert_eq!(html.matches("class=\"value-card\"").count(), 3);
        let positions: Vec<_> = [
            "Empower Your Decision-Making",
            "Data-Driven Insights",
            "Ready for Future Upgrades",
        ]
        .iter()
        .map(|title| html.find(title).expect("card title"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Why EduPath?"));
    }
}
