// Landing screen - hero, value proposition, footer
use leptos::prelude::*;

use crate::animation::{EntranceSequencer, Region};
use crate::config::LandingConfig;
use crate::content::{HERO_IMAGE_ASSET, HERO_IMAGE_HEIGHT, HERO_IMAGE_WIDTH};
use crate::navigation::NavigationDispatcher;
use crate::sections::{Footer, Hero, ValueProposition};
use crate::services::Services;
use crate::styles::LANDING_CSS;

/// The landing screen. Owns no state: everything comes from `services` and
/// `config`, plus today's date read by the footer.
#[component]
pub fn LandingPage(services: Services, config: LandingConfig) -> impl IntoView {
    let plan = EntranceSequencer::new(services.animation.as_ref()).plan();
    let dispatcher = NavigationDispatcher::new(services.navigator.clone());
    let hero_image = services
        .assets
        .resolve(HERO_IMAGE_ASSET, HERO_IMAGE_WIDTH, HERO_IMAGE_HEIGHT, true);

    let keyframes = plan.keyframes().to_string();
    let style_of = |region: Region| plan.style_for(region).unwrap_or_default();

    view! {
        <main class="landing">
            <style>{LANDING_CSS}</style>
            {(!keyframes.is_empty()).then(|| view! { <style>{keyframes}</style> })}
            <Hero
                dispatcher=dispatcher
                image=hero_image
                text_style=style_of(Region::HeroText)
                image_style=style_of(Region::HeroImage)
            />
            <ValueProposition style=style_of(Region::ValueProposition) />
            <Footer clock=services.clock.clone() product_name=config.product_name />
        </main>
    }
}
