//! Service Card Component

use estate_core::Service;
use leptos::prelude::*;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-icon">{service.icon.glyph()}</div>
            <h3>{service.title.clone()}</h3>
            <p class="service-description">{service.description.clone()}</p>
            <ul class="service-features">
                {service
                    .features
                    .iter()
                    .map(|feature| view! { <li>"✓ " {feature.clone()}</li> })
                    .collect_view()}
            </ul>
            <button
                class="btn btn-outline btn-block"
                on:click=move |_| {
                    leptos_viewport::scroll_to_id("contact");
                }
            >
                {service.cta.clone()}
                " →"
            </button>
        </article>
    }
}
