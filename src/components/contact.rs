//! Contact Section Component

use leptos::prelude::*;

use crate::components::{ContactFormPanel, SectionHeading};
use crate::content::SOCIAL_PROOF;
use crate::context::use_site_context;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_site_context();
    let config = ctx.config.get_value();
    let phone_url = config.phone_url();
    let whatsapp_url = config.whatsapp_url();

    view! {
        <div class="section-container contact">
            <SectionHeading
                badge="Get In Touch"
                title="Let's Find Your"
                highlight="Dream Home"
                subtitle="Ready to make your move? Call, message or drop us a note and we'll take it from there."
            />

            <div class="contact-grid">
                <div class="contact-options">
                    <a class="contact-card" href=phone_url>
                        <span class="contact-card-icon">"📞"</span>
                        <div>
                            <h4>"Call Us Now"</h4>
                            <p>{config.phone_display.clone()}</p>
                        </div>
                    </a>
                    <a class="contact-card whatsapp" href=whatsapp_url target="_blank" rel="noopener noreferrer">
                        <span class="contact-card-icon">"💬"</span>
                        <div>
                            <h4>"WhatsApp"</h4>
                            <p>"Quick replies, any time"</p>
                        </div>
                    </a>

                    <div class="office-info">
                        <h4>"Visit Our Office"</h4>
                        <p>"📍 " {config.office_address.clone()}</p>
                        <p>"🕘 " {config.business_hours.clone()}</p>
                        <p>"📞 " {config.phone_display.clone()}</p>
                    </div>

                    <div class="social-proof">
                        {SOCIAL_PROOF
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="proof-item">
                                        <strong>{*value}</strong>
                                        <span>{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <ContactFormPanel />
            </div>
        </div>
    }
}
