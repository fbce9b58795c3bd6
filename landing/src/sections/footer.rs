use std::sync::Arc;

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::copyright_line;
use crate::services::Clock;

/// Copyright line. The year is read from `clock` on every render.
#[component]
pub fn Footer(clock: Arc<dyn Clock>, #[prop(into)] product_name: String) -> impl IntoView {
    let line = copyright_line(clock.today().year(), &product_name);
    view! {
        <footer class="footer">{line}</footer>
    }
}
