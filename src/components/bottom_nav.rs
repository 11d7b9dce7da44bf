//! Bottom Navigation Component
//!
//! Phone-only tab bar; the active tab follows the scroll spy.

use leptos::prelude::*;

use crate::content::BOTTOM_NAV;
use crate::context::use_site_context;

#[component]
pub fn BottomNavigation() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <nav class="bottom-nav">
            {BOTTOM_NAV
                .iter()
                .map(|(id, label, glyph)| {
                    let id = *id;
                    let is_active = move || ctx.active_section.with(|active| active == id);
                    view! {
                        <button
                            class=move || if is_active() { "bottom-nav-item active" } else { "bottom-nav-item" }
                            on:click=move |_| {
                                leptos_viewport::scroll_to_id(id);
                            }
                        >
                            <span class="bottom-nav-icon">{*glyph}</span>
                            <span class="bottom-nav-label">{*label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
