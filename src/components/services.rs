//! Services Section Component
//!
//! Service cards from the manifest, "why choose us" and the four-step process.

use leptos::prelude::*;
use leptos_viewport::Reveal;

use crate::components::{SectionHeading, ServiceCard};
use crate::content::{PROCESS_STEPS, WHY_CHOOSE_US};
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn ServicesSection() -> impl IntoView {
    let store = use_site_store();
    let services = store.services().get_untracked();

    view! {
        <div class="section-container services">
            <SectionHeading
                badge="Our Services"
                title="Complete Real Estate"
                highlight="Solutions"
                subtitle="Buying, selling or renting, we handle every step with local expertise."
            />

            <div class="service-grid">
                {services
                    .into_iter()
                    .enumerate()
                    .map(|(index, service)| {
                        view! {
                            <Reveal delay_ms={index as u32 * 200}>
                                <ServiceCard service=service />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="why-choose-us">
                <h3>"Why Choose Atlantis?"</h3>
                <p>"We're not just another real estate company. Here's what makes us different."</p>
                <div class="reason-grid">
                    {WHY_CHOOSE_US
                        .iter()
                        .map(|(glyph, title, description)| {
                            view! {
                                <div class="reason">
                                    <div class="reason-icon">{*glyph}</div>
                                    <h4>{*title}</h4>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h4 class="process-title">"Our Simple 4-Step Process"</h4>
                <ol class="process-steps">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <li class="process-step">
                                    <span class="step-number">{index + 1}</span>
                                    <h5>{*title}</h5>
                                    <p>{*description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>

            <div class="services-cta">
                <h3>"Ready to Get Started?"</h3>
                <p>"Let's discuss your real estate needs and find the perfect solution for you."</p>
                <button
                    class="btn btn-primary btn-lg"
                    on:click=move |_| {
                        leptos_viewport::scroll_to_id("contact");
                    }
                >
                    "Schedule Consultation →"
                </button>
            </div>
        </div>
    }
}
