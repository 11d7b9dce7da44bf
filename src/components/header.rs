//! Site Header Component
//!
//! Fixed header with logo, section navigation, contact buttons and a mobile
//! menu. Turns solid once the page is scrolled.

use leptos::prelude::*;

use crate::content::HEADER_NAV;
use crate::context::use_site_context;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_site_context();
    let (menu_open, set_menu_open) = signal(false);
    let phone_url = ctx.config.with_value(|c| c.phone_url());
    let whatsapp_url = ctx.config.with_value(|c| c.whatsapp_url());

    // Navigate and close the mobile menu
    let go_to = move |id: &'static str| {
        leptos_viewport::scroll_to_id(id);
        set_menu_open.set(false);
    };

    let header_class = move || {
        if ctx.is_scrolled.get() {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };

    let nav_buttons = move |class: &'static str| {
        HEADER_NAV
            .iter()
            .map(|(id, label)| {
                let id = *id;
                view! {
                    <button class=class on:click=move |_| go_to(id)>
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="header-inner">
                <button class="logo" on:click=move |_| go_to("hero")>
                    "ATLANTIS"
                </button>

                <nav class="desktop-nav">{nav_buttons("nav-link")}</nav>

                <div class="header-actions">
                    <a class="btn btn-outline" href=phone_url.clone()>
                        "📞 Call"
                    </a>
                    <a class="btn btn-primary" href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer">
                        "💬 WhatsApp"
                    </a>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {nav_buttons("mobile-nav-link")}
                    <div class="mobile-menu-actions">
                        <a class="btn btn-outline" href=phone_url.clone()>
                            "📞 Call Now"
                        </a>
                        <a class="btn btn-primary" href=whatsapp_url.clone() target="_blank" rel="noopener noreferrer">
                            "💬 WhatsApp"
                        </a>
                    </div>
                </nav>
            </Show>
        </header>
    }
}
