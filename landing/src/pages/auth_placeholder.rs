// Destinations of the hero actions. Authentication lives elsewhere; these
// only confirm where the router landed and lead back home.
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AuthPlaceholderPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="placeholder">
            <h1>{title}</h1>
            <p>"This part of EduPath is on its way."</p>
            <A href="/">
                <span class="btn btn-secondary">"Back to home"</span>
            </A>
        </div>
    }
}
