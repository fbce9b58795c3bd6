use leptos::prelude::*;

use crate::content::{VALUE_CARDS, VALUE_HEADING, VALUE_SUBHEADING, ValueCard};

#[component]
pub fn ValueProposition(#[prop(optional, into)] style: String) -> impl IntoView {
    view! {
        <section id="why" class="value-proposition">
            <div class="value-inner" style=style>
                <h2 class="value-title">{VALUE_HEADING}</h2>
                <p class="value-description">{VALUE_SUBHEADING}</p>
                <div class="value-grid">
                    {VALUE_CARDS
                        .iter()
                        .map(|card| view! { <ValueCardView card=*card /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ValueCardView(card: ValueCard) -> impl IntoView {
    view! {
        <div class="value-card">
            <div class="value-card-icon">{card.icon}</div>
            <h3 class="value-card-title">{card.title}</h3>
            <p class="value-card-body">{card.body}</p>
        </div>
    }
}
