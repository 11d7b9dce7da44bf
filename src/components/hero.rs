//! Hero Section Component
//!
//! Headline, locality search panel and the two primary calls to action.

use leptos::prelude::*;

use crate::content::LOCALITIES;

#[component]
pub fn HeroSection() -> impl IntoView {
    let (selected_locality, set_selected_locality) = signal(LOCALITIES[0].name);
    let (dropdown_open, set_dropdown_open) = signal(false);

    let find_home = move |_| {
        log::info!("[Hero] searching {}", selected_locality.get_untracked());
        leptos_viewport::scroll_to_id("properties");
    };

    view! {
        <div class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-content">
                <h1>
                    <span class="hero-title">"Atlantis"</span>
                    <span class="hero-tagline">"Your Gateway to Dream Homes"</span>
                </h1>
                <p class="hero-lead">
                    "Discover luxury waterfront properties and premium real estate in the heart of Rourkela, Odisha"
                </p>

                <div class="hero-search glass">
                    <div class="search-field">
                        <label>"City"</label>
                        <input type="text" value="Rourkela" readonly=true />
                    </div>

                    <div class="search-field">
                        <label>"Locality"</label>
                        <button
                            type="button"
                            class="locality-select"
                            on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                        >
                            "📍 "
                            {move || selected_locality.get()}
                            " ▾"
                        </button>
                        <Show when=move || dropdown_open.get()>
                            <div class="locality-options">
                                {LOCALITIES
                                    .iter()
                                    .map(|locality| {
                                        let name = locality.name;
                                        view! {
                                            <button
                                                type="button"
                                                class="locality-option"
                                                on:click=move |_| {
                                                    set_selected_locality.set(name);
                                                    set_dropdown_open.set(false);
                                                }
                                            >
                                                {name}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>

                    <button class="btn btn-primary btn-lg" on:click=find_home>
                        "🔍 Find Your Home"
                    </button>
                </div>

                <div class="hero-actions">
                    <button
                        class="btn btn-gold btn-lg"
                        on:click=move |_| {
                            leptos_viewport::scroll_to_id("properties");
                        }
                    >
                        "Explore Properties"
                    </button>
                    <button
                        class="btn btn-ghost btn-lg"
                        on:click=move |_| {
                            leptos_viewport::scroll_to_id("contact");
                        }
                    >
                        "Contact Us"
                    </button>
                </div>
            </div>
            <div class="scroll-indicator"></div>
        </div>
    }
}
