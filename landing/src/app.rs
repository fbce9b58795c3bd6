//! EduPath web app - router and page wiring

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::LandingConfig;
use crate::pages::{AuthPlaceholderPage, LandingPage, NotFoundPage};
use crate::services::Services;

#[component]
pub fn App() -> impl IntoView {
    let config = LandingConfig::from_build_env();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=move || view! { <Home config=config.clone()/> }/>
                <Route path=path!("/login") view=|| view! { <AuthPlaceholderPage title="Log In"/> }/>
                <Route path=path!("/signup") view=|| view! { <AuthPlaceholderPage title="Sign Up"/> }/>
            </Routes>
        </Router>
    }
}

/// Landing page with browser collaborators. Lives under `<Router>` so the
/// navigator can reach the router context.
#[component]
fn Home(config: LandingConfig) -> impl IntoView {
    let services = Services::browser(&config);
    view! { <LandingPage services=services config=config/> }
}
