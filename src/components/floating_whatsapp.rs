//! Floating WhatsApp Component
//!
//! Appears after a short delay; expands into a chat prompt on click.

use leptos::prelude::*;
use leptos_viewport::use_timeout;

use crate::context::use_site_context;

#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    let ctx = use_site_context();
    let (visible, set_visible) = signal(false);
    let (expanded, set_expanded) = signal(false);
    let chat_url = StoredValue::new(ctx.config.with_value(|c| c.floating_whatsapp_url()));
    let delay_ms = ctx.config.with_value(|c| c.floating_whatsapp_delay_ms);

    use_timeout(delay_ms, move || set_visible.set(true));

    view! {
        <Show when=move || visible.get()>
            <div class="floating-whatsapp">
                <Show when=move || expanded.get()>
                    <div class="chat-bubble">
                        <div class="chat-bubble-header">
                            <strong>"Atlantis Real Estate"</strong>
                            <button
                                class="chat-close"
                                aria-label="Close"
                                on:click=move |_| set_expanded.set(false)
                            >
                                "✕"
                            </button>
                        </div>
                        <p>"Hi there! 👋 Looking for a property? Chat with us on WhatsApp."</p>
                        <a
                            class="btn btn-whatsapp btn-block"
                            href=chat_url.get_value()
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Start Chat"
                        </a>
                    </div>
                </Show>
                <button
                    class="whatsapp-fab"
                    aria-label="Chat on WhatsApp"
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "✕" } else { "💬" }}
                </button>
            </div>
        </Show>
    }
}
